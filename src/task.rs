//! One completion task: call, validate, retry, write

use log::{debug, info, error};
use std::path::PathBuf;

use crate::completion::{ChatMessage, ChatResponse, CompletionClient};
use crate::retry::{run_with_retry, RetryPolicy};

pub const SYSTEM_CONTENT: &str = "You are a songwriter.";
pub const USER_CONTENT: &str = "I want to write a Drake song.";
pub const ASSISTANT_CONTENT: &str
  = "Ok, let's write a song part by part. First tell me about \
     a part of the song using some phrases.";

/// The fixed 4-message conversation seeding one completion
pub fn build_conversation(prompt_text: &str)
  -> Vec<ChatMessage>
{   vec![
      ChatMessage::new("system", SYSTEM_CONTENT)
    , ChatMessage::new("user", USER_CONTENT)
    , ChatMessage::new("assistant", ASSISTANT_CONTENT)
    , ChatMessage::new("user", prompt_text)
    ]
}

/// One (model, category, index) unit of work.
/// Tasks are fully independent; the output path is uniquely
/// keyed by the triple so concurrent writes never collide.
#[derive(Debug, Clone)]
pub struct CompletionTask
{   pub model: String
  , pub category: &'static str
  , pub index: usize
  , pub prompt_text: String
  , pub output_path: PathBuf
}

/// Run one task to success or exhaustion.
///
/// A response is acceptable once its primary content reaches
/// `min_content_length` characters. Raised errors and too-short
/// responses retry under the same policy budget. The file at
/// `output_path` is written if and only if an acceptable
/// response arrived within the budget.
pub async fn run_completion_task(
  client: &CompletionClient
, policy: &RetryPolicy
, task: &CompletionTask
, min_content_length: usize
) -> Result<ChatResponse, crate::error::Error>
{   debug!(
      "Running task {}/{}/song_{}",
      task.model, task.category, task.index
    );

    let messages = build_conversation(&task.prompt_text);

    let response = run_with_retry(
      policy
    , || client.create_completion(&task.model, messages.clone())
    , |resp: &ChatResponse| {
        match resp.primary_content()
        {   Ok(content) => {
              let length = content.chars().count();
              if length < min_content_length
              {   Some(crate::error::Error::ContentTooShort(
                    length
                  ))
              } else
              {   None
              }
            }
          , Err(e) => Some(e)
        }
      }
    ).await?;

    let content = response.primary_content()?;
    tokio::fs::write(&task.output_path, content)
      .await
      .map_err(|e| {
        error!(
          "Failed to write {}: {}",
          task.output_path.display(), e
        );
        crate::error::Error::FileError(format!(
          "{}: {}", task.output_path.display(), e
        ))
      })?;

    info!("Wrote {}", task.output_path.display());
    Ok(response)
}
