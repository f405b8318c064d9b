pub mod customers;
pub mod error;
pub mod problem_details;
