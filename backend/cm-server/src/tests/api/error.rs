use crate::ApiError;

use cm_core::{CoreError, FieldErrors, IdentityError, StoreError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use axum::http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_field_errors_when_rendered_then_400_problem_with_errors_map() {
    // Given
    let mut errors = FieldErrors::new();
    errors.add("email", "nope is not a valid email address");
    errors.add("dateOfBirth", "tomorrow is not a valid date");
    let error = ApiError::from(CoreError::ValidationFailed {
        errors,
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["type"],
        "https://tools.ietf.org/html/rfc9110#section-15.5.1"
    );
    assert_eq!(json["title"], "One or more validation errors occurred.");
    assert_eq!(json["status"], 400);
    assert_eq!(json["errors"]["email"][0], "nope is not a valid email address");
    assert_eq!(json["errors"]["dateOfBirth"][0], "tomorrow is not a valid date");
}

#[test]
fn given_field_errors_when_logged_then_submitted_values_stay_out() {
    // Given
    let mut errors = FieldErrors::new();
    errors.add("email", "jane.doe@example is not a valid email address");
    let error = ApiError::from(CoreError::ValidationFailed {
        errors,
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let logged = error.to_string();

    // Then
    assert!(logged.contains("email"));
    assert!(!logged.contains("jane.doe@example"));
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_empty_body() {
    // Given
    let error = ApiError::from(CoreError::not_found("0b6c2f5e-0000-0000-0000-000000000000"));

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn given_identity_outage_when_rendered_then_503_problem() {
    // Given
    let error = ApiError::from(CoreError::ExternalCheckUnavailable {
        source: IdentityError::timeout(5),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], 503);
    assert_eq!(
        json["title"],
        "The GitHub identity check could not be completed."
    );
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn given_storage_failure_when_rendered_then_500_without_details() {
    // Given
    let error = ApiError::from(CoreError::from(StoreError::unavailable(
        "database is locked at /var/lib/customers.db",
    )));

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["title"], "An internal error occurred.");
    assert!(!json.to_string().contains("customers.db"));
}

#[tokio::test]
async fn given_malformed_body_when_rendered_then_400_problem_with_detail() {
    // Given
    let error = ApiError::MalformedBody {
        message: String::from("expected value at line 1 column 1"),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["title"], "The request body is not valid JSON.");
    assert_eq!(json["detail"], "expected value at line 1 column 1");
    assert!(json.get("errors").is_none());
}
