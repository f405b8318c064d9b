use crate::CustomerResponse;

use serde::Serialize;

/// List of customers response
#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub customers: Vec<CustomerResponse>,
}
