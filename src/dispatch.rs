//! One-shot dispatch of a composed request to the provider

use async_trait::async_trait;
use log::{debug, error, info};

use crate::credential::Credential;
use crate::document::Document;
use crate::error::Error;
use crate::request::{Request, Response};

/// The external completion API, reduced to a single call.
///
/// Implemented by each provider client; tests substitute stubs.
#[async_trait]
pub trait Responder: Send + Sync
{   /// Send the request's message once and return the reply text
    async fn complete(&self, request: &Request) -> Result<String, Error>;
}

/// Builds requests and issues exactly one call per submission
pub struct Dispatcher
{   responder: Box<dyn Responder>
  , provider: crate::Provider
  , model: String
  , max_tokens: usize
}

impl Dispatcher
{   pub fn new(
      responder: Box<dyn Responder>
    , provider: crate::Provider
    , model: impl Into<String>
    , max_tokens: usize
    ) -> Self
    {   Dispatcher
        {   responder
          , provider
          , model: model.into()
          , max_tokens
        }
    }

    /// Dispatcher for the configured provider
    pub fn from_config(
      config: &crate::config::QaConfig
    , credential: Option<&Credential>
    ) -> Result<Self, Error>
    {   let responder = build_responder(config, credential)?;
        Ok(Dispatcher::new(
          responder
        , config.provider
        , config.model()
        , config.max_tokens
        ))
    }

    /// Ask about `document`. Failures of the call come back as
    /// [`Error::Upstream`] and are never retried.
    pub async fn answer(
      &self
    , document: &Document
    , instruction: &str
    ) -> Result<Response, Error>
    {   if document.is_empty()
        {   return Err(Error::MissingInput("document".to_string()));
        }
        if instruction.trim().is_empty()
        {   return Err(Error::MissingInput("question".to_string()));
        }

        let request = Request::new(
          document.as_str()
        , instruction
        , self.model.as_str()
        , self.max_tokens
        );

        info!(
          "Dispatching to {} model {} (max_tokens {})",
          self.provider, self.model, self.max_tokens
        );
        debug!(
          "Document {} bytes ({:?}), instruction {} bytes",
          request.document.len(),
          document.source(),
          request.instruction.len()
        );

        match self.responder.complete(&request).await
        {   Ok(text) => {
              debug!("Received {} bytes", text.len());
              Ok(Response
              {   text
                , provider: self.provider
                , model: self.model.clone()
              })
            }
          , Err(e) => {
              error!("Request to {} failed: {}", self.provider, e);
              Err(Error::Upstream(Box::new(e)))
            }
        }
    }
}

/// Provider client for the configured provider
pub fn build_responder(
  config: &crate::config::QaConfig
, credential: Option<&Credential>
) -> Result<Box<dyn Responder>, Error>
{   let credential = credential
      .cloned()
      .ok_or_else(|| {
        Error::MissingCredential(config.provider.to_string())
      })?;

    let api_base = config.api_base.clone();
    let responder: Box<dyn Responder> = match config.provider
    {   crate::Provider::Anthropic => Box::new(
          crate::providers::AnthropicClient::new(credential, api_base)
        )
      , crate::Provider::MistralAi => Box::new(
          crate::providers::MistralClient::new(credential, api_base)
        )
    };
    debug!("Built {} responder for {}", config.provider, config.api_base());
    Ok(responder)
}
