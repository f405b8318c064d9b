//! Maps configuration onto the GitHub verifier and the validator's bounds.

use cm_config::{GitHubConfig, RetryConfig as RetrySettings};
use cm_github::{GitHubSettings, RetryConfig};

use std::time::Duration;

pub fn github_settings(config: &GitHubConfig) -> GitHubSettings {
    GitHubSettings {
        base_url: config.base_url.clone(),
        token: config.token.clone(),
        user_agent: config.user_agent.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
    }
}

pub fn retry_config(config: &RetrySettings) -> RetryConfig {
    RetryConfig {
        max_attempts: config.max_attempts,
        initial_delay: Duration::from_millis(config.initial_delay_ms),
        max_delay: Duration::from_secs(config.max_delay_secs),
        backoff_multiplier: config.backoff_multiplier,
        jitter: config.jitter,
    }
}

/// Upper bound for a whole username check, retries included
pub fn check_timeout(config: &GitHubConfig) -> Duration {
    Duration::from_secs(config.check_timeout_secs)
}
