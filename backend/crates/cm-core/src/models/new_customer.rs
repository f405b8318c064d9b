use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer fields that have passed every validation rule.
///
/// `CustomerService` only hands the store values produced by `CustomerValidator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub date_of_birth: NaiveDate,
}
