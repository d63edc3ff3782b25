//! LLM provider implementations

pub mod anthropic;
pub mod mistral;

// Re-export for convenience
pub use anthropic::AnthropicClient;
pub use mistral::MistralClient;

use serde::{Deserialize, Serialize};

/// Single chat message, shared by both wire formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

/// Turn a non-success HTTP response into an API error
pub(crate) async fn api_error(
  provider: crate::Provider
, response: reqwest::Response
) -> crate::error::Error
{   let status = response.status();
    let error_text = response.text().await
      .unwrap_or_else(|_| "Unknown error".to_string());
    log::error!("{} API error ({}): {}", provider, status, error_text);
    crate::error::Error::ApiError(
      format!("{} error ({}): {}", provider, status, error_text)
    )
}
