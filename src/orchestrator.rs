//! Fan-out orchestration: build the task cross product, launch
//! everything concurrently, collect per-task outcomes

use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::catalog::ModelDescriptor;
use crate::completion::CompletionClient;
use crate::config::GenerateConfig;
use crate::prompts::PromptSet;
use crate::retry::RetryPolicy;
use crate::task::{run_completion_task, CompletionTask};

/// Per-task outcomes in launch order; None means success
#[derive(Debug, Clone)]
pub struct RunSummary
{   pub slots: Vec<Option<crate::error::Error>>
}

impl RunSummary
{   pub fn len(&self) -> usize
    {   self.slots.len()
    }

    pub fn is_empty(&self) -> bool
    {   self.slots.is_empty()
    }

    pub fn failure_count(&self) -> usize
    {   self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Drives one generation run over the full
/// model x category x index cross product
pub struct Orchestrator
{   client: CompletionClient
  , policy: RetryPolicy
  , config: GenerateConfig
}

impl Orchestrator
{   pub fn new(
      client: CompletionClient
    , policy: RetryPolicy
    , config: GenerateConfig
    ) -> Self
    {   debug!("Creating Orchestrator");
        Orchestrator
        {   client
          , policy
          , config
        }
    }

    /// Construct one task per (model, category, index) tuple
    pub fn build_tasks(
      &self
    , catalog: &[ModelDescriptor]
    , prompt_sets: &[PromptSet]
    ) -> Vec<CompletionTask>
    {   let mut tasks = Vec::new();
        for descriptor in catalog
        {   let model = descriptor.model_id_or_placeholder();
            for set in prompt_sets
            {   let category_dir = self.config.output_dir
                  .join(&model)
                  .join(set.category);
                for (index, prompt) in
                  set.prompts.iter().enumerate()
                {   tasks.push(CompletionTask
                    {   model: model.clone()
                      , category: set.category
                      , index
                      , prompt_text: prompt.clone()
                      , output_path: category_dir.join(
                          format!("song_{}.txt", index)
                        )
                    });
                }
            }
        }
        debug!("Built {} tasks", tasks.len());
        tasks
    }

    /// Launch every task and wait for all of them.
    ///
    /// One task's exhausted failure never cancels or blocks a
    /// sibling; failures land in the summary, not the return
    /// value. Dispatch is unbounded unless `max_in_flight` gates
    /// it with a semaphore.
    pub async fn run(
      &self
    , catalog: &[ModelDescriptor]
    , prompt_sets: &[PromptSet]
    ) -> Result<RunSummary, crate::error::Error>
    {   // Each (model, category) directory is created once,
        // before any of its tasks launch
        for descriptor in catalog
        {   let model = descriptor.model_id_or_placeholder();
            for set in prompt_sets
            {   let category_dir = self.config.output_dir
                  .join(&model)
                  .join(set.category);
                tokio::fs::create_dir_all(&category_dir)
                  .await
                  .map_err(|e| {
                    error!(
                      "Failed to create {}: {}",
                      category_dir.display(), e
                    );
                    crate::error::Error::FileError(format!(
                      "{}: {}", category_dir.display(), e
                    ))
                  })?;
            }
        }

        let tasks = self.build_tasks(catalog, prompt_sets);
        info!("Launching {} completion tasks", tasks.len());

        let semaphore = self.config.max_in_flight
          .map(|n| Arc::new(Semaphore::new(n)));

        let mut handles = Vec::with_capacity(tasks.len());
        for task in tasks
        {   let client = self.client.clone();
            let policy = self.policy.clone();
            let min_length = self.config.min_content_length;
            let gate = semaphore.clone();

            handles.push(tokio::spawn(async move {
              // acquire_owned only errors on a closed
              // semaphore, which never happens here
              let _permit = match gate
              {   Some(sem) => sem.acquire_owned().await.ok()
                , None => None
              };
              run_completion_task(
                &client, &policy, &task, min_length
              ).await
            }));
        }

        let mut slots = Vec::with_capacity(handles.len());
        for handle in handles
        {   let slot = match handle.await
            {   Ok(Ok(_response)) => None
              , Ok(Err(e)) => Some(e)
              , Err(e) => {
                  error!("Task join error: {}", e);
                  Some(crate::error::Error::Other(format!(
                    "task join error: {}", e
                  )))
                }
            };
            slots.push(slot);
        }

        let summary = RunSummary { slots };
        debug!("exceptions:\n {:?}", summary.slots);
        Ok(summary)
    }
}
