#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_test_customer, create_test_new_customer};
pub use test_db::{create_file_pool, create_test_pool};
