use std::fmt;

/// Custom error type for docqa operations
/// Implements Clone so tests and the display layer can hold copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API key available for the selected provider
    MissingCredential(String)
  , /// No document loaded or no question entered
    MissingInput(String)
  , /// The external API call failed; wraps the underlying cause
    Upstream(Box<Error>)
  , /// HTTP transport error
    HttpError(String)
  , /// API returned a non-success status
    ApiError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// API response carried no text
    EmptyResponse
  , /// Filesystem error while loading documents or config
    Io(String)
  , /// Uploaded bytes are not valid UTF-8 text
    Decode(String)
  , /// Uploaded file is not a txt/md file
    UnsupportedFileType(String)
  , /// No template with the given label
    UnknownTemplate(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl Error
{   /// Whether this error came from the outbound API call
    pub fn is_upstream(&self) -> bool
    {   matches!(
          self
        , Error::Upstream(_)
          | Error::HttpError(_)
          | Error::ApiError(_)
          | Error::ParseError(_)
          | Error::EmptyResponse
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingCredential(provider) => {
              write!(f, "Missing API key for: {}", provider)
            }
          , Error::MissingInput(what) => {
              write!(f, "Missing input: {}", what)
            }
          , Error::Upstream(cause) => {
              write!(f, "Upstream failure: {}", cause)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::EmptyResponse => {
              write!(f, "API response contained no text")
            }
          , Error::Io(msg) => {
              write!(f, "I/O error: {}", msg)
            }
          , Error::Decode(msg) => {
              write!(f, "Could not decode file as text: {}", msg)
            }
          , Error::UnsupportedFileType(path) => {
              write!(f,
                "Unsupported file type (expected .txt or .md): {}",
                path
              )
            }
          , Error::UnknownTemplate(label) => {
              write!(f, "Unknown prompt template: {}", label)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{   fn from(e: std::io::Error) -> Self
    {   Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::ParseError(e.to_string())
    }
}
