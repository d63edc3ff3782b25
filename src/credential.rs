//! API key sourcing: explicit value, environment, or interactive entry

use std::io::{BufRead, Write};
use log::debug;

/// API key for the selected provider. Read-only once resolved.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential
{   /// Wrap a key; blank input is treated as no key
    pub fn new(key: impl Into<String>) -> Option<Self>
    {   let key = key.into().trim().to_string();
        if key.is_empty()
        {   None
        } else
        {   Some(Credential(key))
        }
    }

    pub fn expose(&self) -> &str
    {   &self.0
    }
}

impl std::fmt::Debug for Credential
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   write!(f, "Credential(***)")
    }
}

/// Explicit value first, then the named environment variable
pub fn resolve(
  explicit: Option<&str>
, env_var: &str
) -> Option<Credential>
{   if let Some(key) = explicit.and_then(Credential::new)
    {   debug!("Using API key passed on the command line");
        return Some(key);
    }

    match std::env::var(env_var)
    {   Ok(value) => {
          let key = Credential::new(value);
          if key.is_some()
          {   debug!("Using API key from {}", env_var);
          }
          key
        }
      , Err(_) => {
          debug!("{} not set", env_var);
          None
        }
    }
}

/// Label shown in front of the key prompt
pub fn prompt_label(provider: crate::Provider) -> String
{   format!("{} API Key:", provider.display_name())
}

/// Masked terminal entry; typed characters are echoed as `*`
pub fn prompt_masked(provider: crate::Provider)
  -> Result<Option<Credential>, crate::error::Error>
{   let label = prompt_label(provider);
    let answer = inquire::Password::new(&label)
      .with_display_mode(inquire::PasswordDisplayMode::Masked)
      .without_confirmation()
      .prompt();
    masked_answer(answer)
}

/// Cancelling the prompt counts as no key
pub fn masked_answer(
  answer: Result<String, inquire::InquireError>
) -> Result<Option<Credential>, crate::error::Error>
{   match answer
    {   Ok(value) => Ok(Credential::new(value))
      , Err(inquire::InquireError::OperationCanceled)
      | Err(inquire::InquireError::OperationInterrupted) => {
          debug!("API key prompt cancelled");
          Ok(None)
        }
      , Err(e) => Err(crate::error::Error::Io(e.to_string()))
    }
}

/// Non-terminal fallback: prompt on `output` and read one line from `input`
pub fn prompt_for<R, W>(
  provider: crate::Provider
, input: &mut R
, output: &mut W
) -> Result<Option<Credential>, crate::error::Error>
where
  R: BufRead,
  W: Write,
{   write!(output, "{} ", prompt_label(provider))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(Credential::new(line))
}
