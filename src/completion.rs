use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

const DEFAULT_API_BASE: &str
  = "https://api.openai.com/v1";

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn new(role: &str, content: &str) -> Self
    {   ChatMessage
        {   role: role.to_string()
          , content: content.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

impl ChatResponse
{   /// Text content of the primary choice
    pub fn primary_content(&self)
      -> Result<&str, crate::error::Error>
    {   self.choices.first()
          .map(|c| c.message.content.as_str())
          .ok_or(crate::error::Error::NoChoicesInResponse)
    }
}

// ===== Completion Client =====

/// Client for the hosted chat-completion endpoint.
/// Clone is cheap; the inner reqwest client is shared.
#[derive(Debug, Clone)]
pub struct CompletionClient
{   api_key: Option<String>
  , api_base: String
  , http_client: reqwest::Client
}

impl CompletionClient
{   /// Create a new completion client.
    /// `api_base` of None targets the hosted default.
    pub fn new(
      api_key: Option<String>
    , api_base: Option<String>
    ) -> Self
    {   debug!("Creating CompletionClient");
        CompletionClient
        {   api_key
          , api_base: api_base
              .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
          , http_client: reqwest::Client::new()
        }
    }

    fn get_api_key(&self)
      -> Result<&str, crate::error::Error>
    {   self.api_key
          .as_deref()
          .ok_or_else(|| {
            error!("No API key configured");
            crate::error::Error::MissingApiKey
          })
    }

    /// Issue one chat-completion call
    pub async fn create_completion(
      &self
    , model: &str
    , messages: Vec<ChatMessage>
    ) -> Result<ChatResponse, crate::error::Error>
    {   debug!("Issuing completion call for model: {}", model);

        let api_key = self.get_api_key()?;

        let request = ChatRequest
        {   model: model.to_string()
          , messages
        };

        trace!("Completion request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Completion response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Completion API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!("{}: {}", status, error_text)
            ));
        }

        let chat_response: ChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        if chat_response.choices.is_empty()
        {   error!("No choices in response");
            return Err(
              crate::error::Error::NoChoicesInResponse
            );
        }

        Ok(chat_response)
    }
}
