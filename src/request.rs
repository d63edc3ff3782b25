//! Request and response types for one submission

/// Text placed before the document in the outgoing message
pub const DOCUMENT_PREAMBLE: &str = "Here's the article/data:";

/// One document plus one resolved instruction, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request
{   /// Document text
    pub document: String
  , /// Composed instruction or free-form question
    pub instruction: String
  , /// Model name
    pub model: String
  , /// Max tokens to generate
    pub max_tokens: usize
}

impl Request
{   pub fn new(
      document: impl Into<String>
    , instruction: impl Into<String>
    , model: impl Into<String>
    , max_tokens: usize
    ) -> Self
    {   Request
        {   document: document.into()
          , instruction: instruction.into()
          , model: model.into()
          , max_tokens
        }
    }

    /// Content of the single user-role message
    pub fn message_content(&self) -> String
    {   format!(
          "{}\n\n{}\n\n{}",
          DOCUMENT_PREAMBLE, self.document, self.instruction
        )
    }
}

/// Text returned by the API, passed on unmodified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response
{   /// Generated text
    pub text: String
  , /// Provider that generated it
    pub provider: crate::Provider
  , /// Model that generated it
    pub model: String
}
