//! Configuration for the provider, model and document source

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_MAX_TOKENS: usize = 1024;
pub const MAX_TOKENS_CEILING: usize = 8192;
pub const DEFAULT_DOCUMENTS_DIR: &str = "data";

/// docqa configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaConfig
{   /// Provider to send requests to
    pub provider: crate::Provider
  , /// Model identifier; provider default when unset
    pub model: Option<String>
  , /// Maximum tokens the model may generate
    pub max_tokens: usize
  , /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Environment variable holding the API key
    pub api_key_env: Option<String>
  , /// Directory scanned for .txt/.md files
    pub documents_dir: PathBuf
}

impl Default for QaConfig
{   fn default() -> Self
    {   QaConfig::for_provider(crate::Provider::Anthropic)
    }
}

impl QaConfig
{   /// Defaults for the given provider
    pub fn for_provider(provider: crate::Provider) -> Self
    {   QaConfig
        {   provider
          , model: None
          , api_key_env: None
          , max_tokens: DEFAULT_MAX_TOKENS
          , api_base: None
          , documents_dir: PathBuf::from(DEFAULT_DOCUMENTS_DIR)
        }
    }

    /// Load configuration from a JSON file; absent fields keep defaults
    pub fn load(path: &Path)
      -> Result<Self, crate::error::Error>
    {   debug!("Loading config from {}", path.display());
        let config_str = std::fs::read_to_string(path)
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("{}: {}", path.display(), e)
            )
          })?;
        let config: QaConfig = serde_json::from_str(&config_str)
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("{}: {}", path.display(), e)
            )
          })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolved model identifier
    pub fn model(&self) -> &str
    {   self.model
          .as_deref()
          .unwrap_or_else(|| self.provider.default_model())
    }

    /// Resolved environment variable name for the API key
    pub fn api_key_env(&self) -> &str
    {   self.api_key_env
          .as_deref()
          .unwrap_or_else(|| self.provider.default_key_env())
    }

    /// Resolved API base: configured value or the provider default
    pub fn api_base(&self) -> &str
    {   self.api_base
          .as_deref()
          .unwrap_or_else(|| self.provider.default_api_base())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.model().trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "model must not be empty".to_string()
            ));
        }

        if self.max_tokens == 0 || self.max_tokens > MAX_TOKENS_CEILING
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!(
                "max_tokens must be between 1 and {}, got {}",
                MAX_TOKENS_CEILING, self.max_tokens
              )
            ));
        }

        if let Some(base) = &self.api_base
        {   if !(base.starts_with("http://")
                 || base.starts_with("https://"))
            {   return Err(crate::error::Error::InvalidConfiguration(
                  format!("api_base must be an http(s) URL: {}", base)
                ));
            }
        }

        if self.api_key_env().trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "api_key_env must not be empty".to_string()
            ));
        }

        Ok(())
    }
}
