use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "customers-service";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connection settings for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubSettings {
    /// API root, e.g. "https://api.github.com"
    pub base_url: String,
    /// Personal access token; raises the anonymous rate limit when set
    pub token: Option<String>,
    /// GitHub rejects requests without a User-Agent
    pub user_agent: String,
    /// Upper bound for one HTTP attempt
    pub timeout: Duration,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            token: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
