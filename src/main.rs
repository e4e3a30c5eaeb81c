use log::info;

use songgen::catalog::load_model_catalog;
use songgen::completion::CompletionClient;
use songgen::config::{GenerateConfig, RetryConfig};
use songgen::orchestrator::Orchestrator;
use songgen::prompts::sample_prompts;
use songgen::retry::RetryPolicy;

/// Entry point. No flags; behavior is fixed by the config
/// defaults and the contents of the models directory. The exit
/// status reflects only startup failures, never individual task
/// failures.
#[tokio::main]
async fn main() -> Result<(), songgen::error::Error>
{   env_logger::init();

    let config = GenerateConfig::default();
    let policy = RetryPolicy::from_config(
      &RetryConfig::default()
    );

    let catalog = load_model_catalog(&config.models_dir)?;
    info!("Loaded {} model descriptors", catalog.len());

    let mut rng = rand::thread_rng();
    let prompt_sets = sample_prompts(&mut rng);

    let client = CompletionClient::new(
      std::env::var("OPENAI_API_KEY").ok()
    , std::env::var("OPENAI_API_BASE").ok()
    );

    let orchestrator = Orchestrator::new(
      client, policy, config
    );
    orchestrator.run(&catalog, &prompt_sets).await?;

    info!("Generation pass complete");
    Ok(())
}
