//! Customer REST API handlers

use crate::{ApiError, ApiResult, AppState, CustomerListResponse, CustomerResponse};

use cm_core::CustomerRequest;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /customers
///
/// 201 with a Location header pointing at the new customer
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;

    let customer = state.service.create(&request).await?;
    let location = format!("/customers/{}", customer.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(CustomerResponse::from(customer)),
    )
        .into_response())
}

/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> ApiResult<Json<CustomerListResponse>> {
    let customers = state.service.list().await?;

    Ok(Json(CustomerListResponse {
        customers: customers.into_iter().map(CustomerResponse::from).collect(),
    }))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer_id = parse_customer_id(&id)?;
    let customer = state.service.get(customer_id).await?;

    Ok(Json(customer.into()))
}

/// PUT /customers/{id}
///
/// Replaces every field; there is no partial update
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer_id = parse_customer_id(&id)?;
    let Json(request) = payload?;

    let customer = state.service.update(customer_id, &request).await?;

    Ok(Json(customer.into()))
}

/// DELETE /customers/{id}
///
/// 200 with an empty body
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let customer_id = parse_customer_id(&id)?;
    state.service.delete(customer_id).await?;

    Ok(StatusCode::OK)
}

// =============================================================================
// Helpers
// =============================================================================

/// Ids that are not UUIDs can never have been issued
#[track_caller]
fn parse_customer_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::not_found(format!("Customer {} not found", id)))
}
