use cm_core::Customer;

use serde::Serialize;

/// Customer as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerResponse {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "gitHubUsername")]
    pub github_username: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            full_name: customer.full_name,
            email: customer.email,
            github_username: customer.github_username,
            date_of_birth: customer.date_of_birth.format("%Y-%m-%d").to_string(),
        }
    }
}
