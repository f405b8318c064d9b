use cm_core::{Customer, NewCustomer};

use chrono::NaiveDate;

/// Creates validated customer fields with sensible defaults
pub fn create_test_new_customer(full_name: &str) -> NewCustomer {
    NewCustomer {
        full_name: full_name.to_string(),
        email: "jane@example.com".to_string(),
        github_username: "validuser".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    }
}

/// Creates a test Customer with a fresh id
pub fn create_test_customer(full_name: &str) -> Customer {
    Customer::new(create_test_new_customer(full_name))
}
