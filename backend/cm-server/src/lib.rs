pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod identity;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    customers::{
        customer_list_response::CustomerListResponse,
        customer_response::CustomerResponse,
        customers::{create_customer, delete_customer, get_customer, list_customers, update_customer},
    },
    error::ApiError,
    error::Result as ApiResult,
    problem_details::ProblemDetails,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
