//! Customer validation rules.
//!
//! Rules run in a fixed order and every rule runs, so a request with several
//! problems gets all of them back at once:
//!
//! 1. `fullName` is not blank
//! 2. `email` is a syntactically valid address
//! 3. `gitHubUsername` names an existing account (asks the identity provider)
//! 4. `dateOfBirth` is a calendar date
//!
//! The only way validation ends without a full set of field errors is when the
//! identity provider cannot be reached; then the result is
//! `ValidationFailure::IdentityUnavailable` and no field error is invented for
//! the username.

use crate::validation::fields::{DATE_OF_BIRTH, EMAIL, FULL_NAME, GITHUB_USERNAME};
use crate::{
    CustomerRequest, FieldErrors, IdentityError, IdentityVerifier, NewCustomer, ValidationFailure,
};

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use validator::ValidateEmail;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const YEARS: RangeInclusive<i32> = 1..=9999;

pub struct CustomerValidator {
    verifier: Arc<dyn IdentityVerifier>,
    check_timeout: Duration,
}

impl CustomerValidator {
    /// # Arguments
    /// * `verifier` - identity provider used by the username rule
    /// * `check_timeout` - upper bound on a single username check
    pub fn new(verifier: Arc<dyn IdentityVerifier>, check_timeout: Duration) -> Self {
        Self {
            verifier,
            check_timeout,
        }
    }

    pub async fn validate(
        &self,
        request: &CustomerRequest,
    ) -> Result<NewCustomer, ValidationFailure> {
        let mut errors = FieldErrors::new();

        if request.full_name.trim().is_empty() {
            errors.add(FULL_NAME, "Full name must not be empty");
        }

        if !request.email.validate_email() {
            errors.add(
                EMAIL,
                format!("{} is not a valid email address", request.email),
            );
        }

        if !self.username_exists(&request.github_username).await? {
            errors.add(
                GITHUB_USERNAME,
                format!(
                    "There is no GitHub user with username {}",
                    request.github_username
                ),
            );
        }

        let date_of_birth = parse_date(&request.date_of_birth);
        if date_of_birth.is_none() {
            errors.add(
                DATE_OF_BIRTH,
                format!("{} is not a valid date", request.date_of_birth),
            );
        }

        match date_of_birth {
            Some(date_of_birth) if errors.is_empty() => Ok(NewCustomer {
                full_name: request.full_name.clone(),
                email: request.email.clone(),
                github_username: request.github_username.clone(),
                date_of_birth,
            }),
            _ => {
                debug!("Customer request rejected: {}", errors);
                Err(ValidationFailure::Invalid(errors))
            }
        }
    }

    async fn username_exists(&self, username: &str) -> Result<bool, IdentityError> {
        // GitHub has no account with an empty login, and asking would hit /users
        if username.trim().is_empty() {
            return Ok(false);
        }

        match tokio::time::timeout(self.check_timeout, self.verifier.exists(username)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Identity check for {} timed out after {:?}",
                    username, self.check_timeout
                );
                Err(IdentityError::timeout(self.check_timeout.as_secs()))
            }
        }
    }
}

/// Parse a calendar date. A date-time, with a `T` or a space before the time
/// or in RFC 3339 form, is accepted and truncated to its date. Years outside
/// 1-9999 are rejected so every stored date prints back as `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(value, format)
                    .ok()
                    .map(|dt| dt.date())
            })
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .filter(|date| YEARS.contains(&date.year()))
}
