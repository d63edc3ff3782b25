use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

use super::ChatMessage;

pub const ANTHROPIC_API_BASE: &str
  = "https://api.anthropic.com";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessageRequest
{   pub model: String
  , pub max_tokens: usize
  , pub messages: Vec<ChatMessage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicMessageResponse
{   pub content: Vec<ContentBlock>
  , #[serde(default)]
    pub stop_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock
{   #[serde(rename = "type")]
    pub block_type: String
  , #[serde(default)]
    pub text: Option<String>
}

// ===== Anthropic Client =====

/// Messages API client
pub struct AnthropicClient
{   api_key: crate::credential::Credential
  , api_base: String
  , http_client: reqwest::Client
}

impl AnthropicClient
{   pub fn new(
      api_key: crate::credential::Credential
    , api_base: Option<String>
    ) -> Self
    {   debug!("Creating AnthropicClient");
        AnthropicClient
        {   api_key
          , api_base: api_base
              .unwrap_or_else(|| ANTHROPIC_API_BASE.to_string())
              .trim_end_matches('/')
              .to_string()
          , http_client: reqwest::Client::new()
        }
    }

    /// Send one user message and return the first content block's text
    pub async fn send_prompt(
      &self
    , prompt: String
    , model: &str
    , max_tokens: usize
    ) -> Result<String, crate::error::Error>
    {   debug!("Handling send_prompt for: {}", model);

        let request = AnthropicMessageRequest
        {   model: model.to_string()
          , max_tokens
          , messages: vec![ChatMessage::user(prompt)]
        };

        trace!("Anthropic request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/v1/messages", self.api_base))
          .header("x-api-key", self.api_key.expose())
          .header("anthropic-version", ANTHROPIC_VERSION)
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Anthropic response status: {}", status);

        if !status.is_success()
        {   return Err(super::api_error(
              crate::Provider::Anthropic, response
            ).await);
        }

        let message: AnthropicMessageResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        debug!("Stop reason: {:?}", message.stop_reason);

        message.content.into_iter()
          .next()
          .and_then(|block| block.text)
          .ok_or_else(|| {
            error!("No text in response");
            crate::error::Error::EmptyResponse
          })
    }
}

#[async_trait::async_trait]
impl crate::dispatch::Responder for AnthropicClient
{   async fn complete(
      &self
    , request: &crate::request::Request
    ) -> Result<String, crate::error::Error>
    {   self.send_prompt(
          request.message_content()
        , &request.model
        , request.max_tokens
        ).await
    }
}
