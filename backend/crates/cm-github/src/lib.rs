mod github_identity_verifier;
mod github_settings;
mod retry;


pub use github_identity_verifier::GitHubIdentityVerifier;
pub use github_settings::GitHubSettings;
pub use retry::{IsRetryable, RetryConfig, with_retry};
