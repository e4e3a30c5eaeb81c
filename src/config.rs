//! Configuration for the generation run and retry behavior

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig
{   /// Directory of model descriptor files
    pub models_dir: PathBuf
  , /// Root directory for generated lyric files
    pub output_dir: PathBuf
  , /// Minimum acceptable response length in characters
    pub min_content_length: usize
  , /// Cap on concurrently running tasks.
    /// None launches every task immediately
    pub max_in_flight: Option<usize>
}

impl Default for GenerateConfig
{   fn default() -> Self
    {   GenerateConfig
        {   models_dir: PathBuf::from("./models")
          , output_dir: PathBuf::from("./generated_undiff_lyrics")
          , min_content_length: 128
          , max_in_flight: None
        }
    }
}

/// Retry configuration shared by both retry triggers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig
{   /// Max attempts per task
    pub max_tries: usize
  , /// Max elapsed wall-clock retry budget in seconds
    pub max_elapsed_secs: u64
  , /// Backoff multiplier between attempts
    pub backoff_multiplier: f32
  , /// Initial backoff duration in milliseconds
    pub initial_backoff_ms: u64
}

impl Default for RetryConfig
{   fn default() -> Self
    {   RetryConfig
        {   max_tries: 16
          , max_elapsed_secs: 512
          , backoff_multiplier: 2.0
          , initial_backoff_ms: 100
        }
    }
}
