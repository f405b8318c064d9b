pub mod error;
pub mod identity;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use identity::identity_error::IdentityError;
pub use identity::identity_verifier::IdentityVerifier;
pub use models::customer::Customer;
pub use models::customer_request::CustomerRequest;
pub use models::field_errors::FieldErrors;
pub use models::new_customer::NewCustomer;
pub use service::customer_service::CustomerService;
pub use store::customer_store::{CustomerStore, StoreError, StoreResult};
pub use validation::customer_validator::CustomerValidator;
pub use validation::validation_failure::ValidationFailure;
