pub mod customer_store;
