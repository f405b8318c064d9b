//! REST API error types
//!
//! Validation, outage and internal failures are answered with an RFC 9457
//! problem body. Not-found answers carry no body at all.

use crate::ProblemDetails;

use cm_core::{CoreError, FieldErrors};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more fields failed validation (400)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// Body could not be read as a customer (400)
    #[error("Malformed request body: {message} {location}")]
    MalformedBody {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown, deleted or unparseable id (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// The identity check could not be completed (503)
    #[error("Service unavailable: {message} {location}")]
    ServiceUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::MalformedBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Client mistakes are routine; outages and internal failures are not
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let problem = match self {
            ApiError::NotFound { .. } => return status.into_response(),
            ApiError::Validation { errors, .. } => ProblemDetails::validation(errors),
            ApiError::MalformedBody { message, .. } => ProblemDetails::malformed_body(message),
            ApiError::ServiceUnavailable { .. } => ProblemDetails::service_unavailable(),
            // Never leak storage details
            ApiError::Internal { .. } => ProblemDetails::internal(),
        };

        (status, Json(problem)).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::ValidationFailed { errors, .. } => ApiError::Validation { errors, location },
            CoreError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("Customer {} not found", id),
                location,
            },
            CoreError::ExternalCheckUnavailable { source, .. } => ApiError::ServiceUnavailable {
                message: source.to_string(),
                location,
            },
            CoreError::Storage { source, .. } => ApiError::Internal {
                message: source.to_string(),
                location,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
