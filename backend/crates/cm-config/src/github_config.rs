use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "customers-service";

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const MIN_CHECK_TIMEOUT_SECS: u64 = 1;
pub const MAX_CHECK_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_CHECK_TIMEOUT_SECS: u64 = 15;

/// Identity provider settings.
///
/// `timeout_secs` bounds a single HTTP attempt; `check_timeout_secs` bounds
/// the whole username check including retries.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub check_timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            token: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            check_timeout_secs: DEFAULT_CHECK_TIMEOUT_SECS,
        }
    }
}

// Keeps the token out of debug output
impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("check_timeout_secs", &self.check_timeout_secs)
            .finish()
    }
}

impl GitHubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::github(format!(
                "github.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::github("github.user_agent must not be empty"));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::github(format!(
                "github.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.check_timeout_secs < MIN_CHECK_TIMEOUT_SECS
            || self.check_timeout_secs > MAX_CHECK_TIMEOUT_SECS
        {
            return Err(ConfigError::github(format!(
                "github.check_timeout_secs must be {}-{}, got {}",
                MIN_CHECK_TIMEOUT_SECS, MAX_CHECK_TIMEOUT_SECS, self.check_timeout_secs
            )));
        }

        if self.check_timeout_secs < self.timeout_secs {
            return Err(ConfigError::github(format!(
                "github.check_timeout_secs ({}) must be >= github.timeout_secs ({})",
                self.check_timeout_secs, self.timeout_secs
            )));
        }

        Ok(())
    }
}
