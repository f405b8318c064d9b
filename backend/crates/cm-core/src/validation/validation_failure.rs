use crate::{FieldErrors, IdentityError};

/// Why `CustomerValidator::validate` did not accept a request.
#[derive(Debug)]
pub enum ValidationFailure {
    /// One or more rules failed; carries every message, not just the first
    Invalid(FieldErrors),
    /// The username rule could not be decided
    IdentityUnavailable(IdentityError),
}

impl ValidationFailure {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationFailure::Invalid(errors) => Some(errors),
            ValidationFailure::IdentityUnavailable(_) => None,
        }
    }
}

impl From<IdentityError> for ValidationFailure {
    fn from(error: IdentityError) -> Self {
        ValidationFailure::IdentityUnavailable(error)
    }
}
