pub mod customer_validator;
pub mod fields;
pub mod validation_failure;
