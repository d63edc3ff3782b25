pub mod error;
pub mod config;
pub mod credential;
pub mod document;
pub mod templates;
pub mod compose;
pub mod request;
pub mod providers;
pub mod dispatch;
pub mod display;
use serde::{Deserialize, Serialize};

/*

docqa: ask a hosted LLM about a text document.

  document  -> load an uploaded file, or every .txt/.md in a directory
  compose   -> template body + question (or a free-form question)
  dispatch  -> one user message, one API call, first text back
  display   -> "### Answer" + the text, or a user-visible error

Nothing is kept between submissions. The API key is read once and
only passed through.

*/

pub use compose::{compose_instruction, Blocked, PromptChoice, ReadySubmission, Submission};
pub use config::QaConfig;
pub use credential::Credential;
pub use dispatch::{build_responder, Dispatcher, Responder};
pub use document::{Document, DocumentSource};
pub use error::Error;
pub use request::{Request, Response};
pub use templates::PromptTemplate;

/// Hosted LLM providers a submission can be sent to.
///
/// Spelled `anthropic` / `mistral` in config files, same as on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Provider
{   /// Anthropic (Claude models, messages API)
    Anthropic
  , /// Mistral AI (chat completions API)
    MistralAi
}

impl Provider
{   /// Lowercase name accepted by `FromStr` and written to config files
    pub fn key(&self) -> &'static str
    {   match self
        {   Provider::Anthropic => "anthropic"
          , Provider::MistralAi => "mistral"
        }
    }

    /// Model used when the configuration names none
    pub fn default_model(&self) -> &'static str
    {   match self
        {   Provider::Anthropic => "claude-3-sonnet-20240229"
          , Provider::MistralAi => "mistral-small-latest"
        }
    }

    /// Environment variable the API key is looked up in
    pub fn default_key_env(&self) -> &'static str
    {   match self
        {   Provider::Anthropic => "ANTHROPIC_API_KEY"
          , Provider::MistralAi => "MISTRAL_API_KEY"
        }
    }

    pub fn default_api_base(&self) -> &'static str
    {   match self
        {   Provider::Anthropic => providers::anthropic::ANTHROPIC_API_BASE
          , Provider::MistralAi => providers::mistral::MISTRAL_API_BASE
        }
    }

    /// Name shown to the user, e.g. in "add your Anthropic API key"
    pub fn display_name(&self) -> &'static str
    {   match self
        {   Provider::Anthropic => "Anthropic"
          , Provider::MistralAi => "Mistral"
        }
    }
}

impl std::fmt::Display for Provider
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   write!(f, "{}", self.display_name())
    }
}

impl TryFrom<String> for Provider
{   type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error>
    {   s.parse()
    }
}

impl From<Provider> for String
{   fn from(p: Provider) -> Self
    {   p.key().to_string()
    }
}

impl std::str::FromStr for Provider
{   type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s.trim().to_ascii_lowercase().as_str()
        {   "anthropic" | "claude" => Ok(Provider::Anthropic)
          , "mistral" | "mistralai" => Ok(Provider::MistralAi)
          , other => Err(Error::InvalidConfiguration(
              format!("unknown provider: {}", other)
            ))
        }
    }
}
