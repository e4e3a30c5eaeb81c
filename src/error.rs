use std::fmt;

/// Custom error type for songgen operations
/// Implements Clone so failures can be captured per task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is missing for the completion endpoint
    MissingApiKey
  , /// HTTP request error
    HttpError(String)
  , /// API returned an error response
    ApiError(String)
  , /// Failed to parse structured data
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Response content shorter than the minimum length
    ContentTooShort(usize)
  , /// Filesystem error while writing output
    FileError(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "Missing API key for completion endpoint")
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
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::ContentTooShort(len) => {
              write!(f,
                "Response content too short: {} chars",
                len
              )
            }
          , Error::FileError(msg) => {
              write!(f, "File error: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
