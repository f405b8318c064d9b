mod customer_response;
mod error;
