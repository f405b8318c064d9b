//! Field names as they appear on the wire and in validation error keys.

pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const GITHUB_USERNAME: &str = "gitHubUsername";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
