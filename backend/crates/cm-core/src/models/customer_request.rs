use serde::{Deserialize, Serialize};

/// Unvalidated customer input as submitted by a client.
///
/// Every field is plain text so that malformed values reach the validator
/// and come back as field errors. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {
    #[serde(default, rename = "fullName")]
    pub full_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, rename = "gitHubUsername")]
    pub github_username: String,

    /// `YYYY-MM-DD`; a date-time is accepted and its time part dropped
    #[serde(default, rename = "dateOfBirth")]
    pub date_of_birth: String,
}
