//! Customer entity - a validated record as held by the store.

use crate::NewCustomer;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Assigned at creation, never changes and never reissued
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a customer with a fresh id from validated input
    pub fn new(customer: NewCustomer) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name: customer.full_name,
            email: customer.email,
            github_username: customer.github_username,
            date_of_birth: customer.date_of_birth,
            created_at: now,
            updated_at: now,
        }
    }
}
