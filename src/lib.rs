pub mod error;
pub mod config;
pub mod prompts;
pub mod catalog;
pub mod completion;
pub mod retry;
pub mod task;
pub mod orchestrator;

/*

songgen: batch lyric generation against fine-tuned chat models.

One run reads model descriptors from ./models, samples three
fixed categories of prompt seeds, fans out one completion task
per (model, category, index) tuple against the hosted chat API,
and writes each acceptable response to
./generated_undiff_lyrics/{model}/{category}/song_{index}.txt.

songgen/
├── Cargo.toml
├── src/
│   ├── lib.rs           # Re-exports
│   ├── error.rs         # Custom error types
│   ├── config.rs        # Run and retry configuration
│   ├── prompts.rs       # Vocabularies and prompt sampling
│   ├── catalog.rs       # Model descriptor loading
│   ├── completion.rs    # Chat-completion HTTP client
│   ├── retry.rs         # Backoff policy and retry driver
│   ├── task.rs          # One completion task
│   ├── orchestrator.rs  # Concurrent fan-out and summary
│   └── main.rs          # Entry point
└── tests/               # Integration tests

*/

pub use catalog::{load_model_catalog, ModelDescriptor};
pub use completion::{
  ChatMessage, ChatRequest, ChatResponse, Choice,
  CompletionClient
};
pub use config::{GenerateConfig, RetryConfig};
pub use error::Error;
pub use orchestrator::{Orchestrator, RunSummary};
pub use prompts::{sample_prompts, PromptSet};
pub use retry::{run_with_retry, RetryPolicy};
pub use task::{
  build_conversation, run_completion_task, CompletionTask
};
