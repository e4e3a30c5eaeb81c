//! Retry policy and the shared backoff-driven retry driver
//!
//! Two retry triggers compose over one call: a raised error from
//! the remote, and a successful response rejected by a validation
//! predicate. Both draw from the same attempt and wall-clock
//! budget.

use std::future::Future;
use std::time::{Duration, Instant};
use log::{debug, warn};

/// Retry policy shared by both retry triggers
#[derive(Debug, Clone)]
pub struct RetryPolicy
{   pub max_tries: usize
  , pub max_elapsed: Duration
  , pub backoff_multiplier: f32
  , pub initial_backoff: Duration
}

impl RetryPolicy
{   /// Create a new retry policy
    pub fn new(
      max_tries: usize
    , max_elapsed_secs: u64
    , backoff_multiplier: f32
    , initial_backoff_ms: u64
    ) -> Self
    {   RetryPolicy
        {   max_tries
          , max_elapsed: Duration::from_secs(max_elapsed_secs)
          , backoff_multiplier
          , initial_backoff: Duration::from_millis(
              initial_backoff_ms
            )
        }
    }

    /// Build a policy from run configuration
    pub fn from_config(config: &crate::config::RetryConfig)
      -> Self
    {   RetryPolicy::new(
          config.max_tries
        , config.max_elapsed_secs
        , config.backoff_multiplier
        , config.initial_backoff_ms
        )
    }

    /// Calculate backoff duration for attempt number (0-based)
    pub fn backoff_for_attempt(
      &self
    , attempt: usize
    ) -> Duration
    {   let multiplier
          = self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis(
          (self.initial_backoff.as_millis() as f32
            * multiplier) as u64
        )
    }
}

impl Default for RetryPolicy
{   fn default() -> Self
    {   RetryPolicy::from_config(
          &crate::config::RetryConfig::default()
        )
    }
}

/// Drive one operation under the shared retry budget.
///
/// `validate` inspects a successful value and returns the error
/// that makes it unacceptable, or None to accept it. Exhaustion
/// returns the last failure, raised or validation, unchanged.
pub async fn run_with_retry<T, F, Fut, P>(
  policy: &RetryPolicy
, mut op: F
, validate: P
) -> Result<T, crate::error::Error>
where
  F: FnMut() -> Fut
, Fut: Future<Output = Result<T, crate::error::Error>>
, P: Fn(&T) -> Option<crate::error::Error>
{   let start = Instant::now();
    let mut attempt: usize = 0;

    loop
    {   attempt += 1;

        let failure = match op().await
        {   Ok(value) => {
              match validate(&value)
              {   None => return Ok(value)
                , Some(e) => e
              }
            }
          , Err(e) => e
        };

        debug!("Attempt {} unacceptable: {}", attempt, failure);

        if attempt >= policy.max_tries
        {   warn!(
              "Giving up after {} attempts: {}",
              attempt, failure
            );
            return Err(failure);
        }

        let elapsed = start.elapsed();
        if elapsed >= policy.max_elapsed
        {   warn!(
              "Giving up after {:?} elapsed: {}",
              elapsed, failure
            );
            return Err(failure);
        }

        // Cap the wait so the total never exceeds the budget
        let delay = policy
          .backoff_for_attempt(attempt - 1)
          .min(policy.max_elapsed - elapsed);
        debug!("Backing off {:?} before attempt {}", delay, attempt + 1);
        tokio::time::sleep(delay).await;
    }
}
