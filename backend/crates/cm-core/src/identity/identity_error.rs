use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// The identity provider could not answer whether a username exists.
///
/// "User does not exist" is never an `IdentityError`; it is `Ok(false)`.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity provider request failed: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider did not answer within {timeout_secs}s {location}")]
    Timeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    /// Throttled; `retry_after_secs` is the wait the provider asked for, if any
    #[error("Identity provider is rate limiting requests (retry after {retry_after_secs:?}s) {location}")]
    RateLimited {
        retry_after_secs: Option<u64>,
        location: ErrorLocation,
    },

    #[error("Identity provider returned status {status} for {username} {location}")]
    UnexpectedStatus {
        status: u16,
        username: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        IdentityError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(timeout_secs: u64) -> Self {
        IdentityError::Timeout {
            timeout_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rate_limited(retry_after_secs: Option<u64>) -> Self {
        IdentityError::RateLimited {
            retry_after_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_status(status: u16, username: &str) -> Self {
        IdentityError::UnexpectedStatus {
            status,
            username: username.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Transport failures, timeouts, throttling and server-side errors may
    /// succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            IdentityError::Transport { .. }
            | IdentityError::Timeout { .. }
            | IdentityError::RateLimited { .. } => true,
            IdentityError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        }
    }

    /// How long the provider asked callers to back off.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            IdentityError::RateLimited {
                retry_after_secs: Some(secs),
                ..
            } => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }
}
