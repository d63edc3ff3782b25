use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

use super::ChatMessage;

pub const MISTRAL_API_BASE: &str
  = "https://api.mistral.ai/v1";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize)]
pub struct MistralChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>
}

#[derive(Debug, Clone, Deserialize)]
pub struct MistralChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

// ===== Mistral Client =====

/// Chat completions client
pub struct MistralClient
{   api_key: crate::credential::Credential
  , api_base: String
  , http_client: reqwest::Client
}

impl MistralClient
{   pub fn new(
      api_key: crate::credential::Credential
    , api_base: Option<String>
    ) -> Self
    {   debug!("Creating MistralClient");
        MistralClient
        {   api_key
          , api_base: api_base
              .unwrap_or_else(|| MISTRAL_API_BASE.to_string())
              .trim_end_matches('/')
              .to_string()
          , http_client: reqwest::Client::new()
        }
    }

    /// Send one user message and return the first choice's content
    pub async fn send_prompt(
      &self
    , prompt: String
    , model: &str
    , max_tokens: usize
    ) -> Result<String, crate::error::Error>
    {   debug!("Handling send_prompt for: {}", model);

        let request = MistralChatRequest
        {   model: model.to_string()
          , messages: vec![ChatMessage::user(prompt)]
          , max_tokens: Some(max_tokens)
          , stream: Some(false)
        };

        trace!("Mistral request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header(
            "Authorization"
          , format!("Bearer {}", self.api_key.expose())
          )
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Mistral response status: {}", status);

        if !status.is_success()
        {   return Err(super::api_error(
              crate::Provider::MistralAi, response
            ).await);
        }

        let chat_response: MistralChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        let choice = chat_response.choices.into_iter()
          .next()
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::EmptyResponse
          })?;
        debug!("Finish reason: {:?}", choice.finish_reason);
        Ok(choice.message.content)
    }
}

#[async_trait::async_trait]
impl crate::dispatch::Responder for MistralClient
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
