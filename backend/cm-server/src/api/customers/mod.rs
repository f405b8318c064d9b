pub mod customer_list_response;
pub mod customer_response;
pub mod customers;
