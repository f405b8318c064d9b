//! GitHub-backed identity verifier.
//!
//! `GET {base_url}/users/{username}`: 200 means the account exists, 404 means
//! it does not. Anything else, including transport failures and timeouts, is
//! an `IdentityError` after bounded retries.
//!
//! 429, and 403 with `x-ratelimit-remaining: 0`, are rate limiting. The wait
//! comes from `Retry-After`, falling back to `x-ratelimit-reset`.

use crate::{GitHubSettings, RetryConfig, with_retry};

use cm_core::{IdentityError, IdentityVerifier};

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, RETRY_AFTER};
use reqwest::{Client as ReqwestClient, StatusCode, Url};

use std::time::{SystemTime, UNIX_EPOCH};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

pub struct GitHubIdentityVerifier {
    base_url: Url,
    token: Option<String>,
    timeout_secs: u64,
    retry: RetryConfig,
    client: ReqwestClient,
}

impl GitHubIdentityVerifier {
    #[track_caller]
    pub fn new(settings: GitHubSettings, retry: RetryConfig) -> Result<Self, IdentityError> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            IdentityError::transport(format!(
                "Invalid GitHub base URL {}: {}",
                settings.base_url, e
            ))
        })?;

        let client = ReqwestClient::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .build()
            .map_err(|e| IdentityError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            token: settings.token,
            timeout_secs: settings.timeout.as_secs(),
            retry,
            client,
        })
    }

    /// `{base_url}/users/{username}` with the username percent-encoded as one segment
    fn user_url(&self, username: &str) -> Result<Url, IdentityError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| IdentityError::transport("GitHub base URL cannot be a base"))?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }

    async fn lookup(&self, url: Url, username: &str) -> Result<bool, IdentityError> {
        let mut request = self.client.get(url).header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status if is_rate_limited(status, response.headers()) => {
                let wait = requested_wait_secs(response.headers());
                debug!("GitHub rate limited the lookup, asked to wait {:?}s", wait);
                Err(IdentityError::rate_limited(wait))
            }
            status => Err(IdentityError::unexpected_status(status.as_u16(), username)),
        }
    }

    #[track_caller]
    fn map_send_error(&self, error: reqwest::Error) -> IdentityError {
        if error.is_timeout() {
            IdentityError::timeout(self.timeout_secs)
        } else {
            IdentityError::transport(error.to_string())
        }
    }
}

#[async_trait]
impl IdentityVerifier for GitHubIdentityVerifier {
    async fn exists(&self, username: &str) -> Result<bool, IdentityError> {
        let url = self.user_url(username)?;
        debug!("Checking GitHub user {}", username);

        let exists = with_retry(&self.retry, "GitHub user lookup", || {
            self.lookup(url.clone(), username)
        })
        .await?;

        debug!("GitHub user {} exists: {}", username, exists);
        Ok(exists)
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && header_u64(headers, RATE_LIMIT_REMAINING) == Some(0))
}

/// Seconds from `Retry-After`, else until the `x-ratelimit-reset` epoch
fn requested_wait_secs(headers: &HeaderMap) -> Option<u64> {
    if let Some(secs) = header_u64(headers, RETRY_AFTER.as_str()) {
        return Some(secs);
    }

    let reset_at = header_u64(headers, RATE_LIMIT_RESET)?;
    let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
    Some(reset_at.saturating_sub(now))
}
