use crate::{FieldErrors, IdentityError, StoreError, ValidationFailure};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures a `CustomerService` operation can end in.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {errors} {location}")]
    ValidationFailed {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Customer not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Identity check unavailable: {source} {location}")]
    ExternalCheckUnavailable {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    #[error("Storage failure: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field errors carried by a validation failure, if that is what this is.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CoreError::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

impl From<StoreError> for CoreError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        CoreError::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ValidationFailure> for CoreError {
    #[track_caller]
    fn from(failure: ValidationFailure) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match failure {
            ValidationFailure::Invalid(errors) => CoreError::ValidationFailed { errors, location },
            ValidationFailure::IdentityUnavailable(source) => {
                CoreError::ExternalCheckUnavailable { source, location }
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
