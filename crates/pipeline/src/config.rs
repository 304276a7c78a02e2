use std::time::Duration;

use brandkit_core::retry::{RetryPolicy, DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS};

pub const DEFAULT_IMAGE_FETCH_TIMEOUT_SECS: u64 = 30;

/// Pipeline settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Timeout for downloading one product image, in seconds.
    pub image_fetch_timeout_secs: u64,
    /// Retry policy shared by the vision and text calls.
    pub retry: RetryPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image_fetch_timeout_secs: DEFAULT_IMAGE_FETCH_TIMEOUT_SECS,
            retry: RetryPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Default |
    /// |----------------------------|---------|
    /// | `IMAGE_FETCH_TIMEOUT_SECS` | `30`    |
    ///
    /// The retry policy is fixed at 3 attempts with a 500 ms backoff.
    pub fn from_env() -> Self {
        let image_fetch_timeout_secs: u64 = std::env::var("IMAGE_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_IMAGE_FETCH_TIMEOUT_SECS.to_string())
            .parse()
            .expect("IMAGE_FETCH_TIMEOUT_SECS must be a valid u64");

        Self {
            image_fetch_timeout_secs,
            retry: RetryPolicy::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BACKOFF),
        }
    }

    pub fn image_fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.image_fetch_timeout_secs)
    }
}
