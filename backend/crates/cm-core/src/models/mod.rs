pub mod customer;
pub mod customer_request;
pub mod field_errors;
pub mod new_customer;
