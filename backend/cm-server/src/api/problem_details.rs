use cm_core::FieldErrors;

use serde::Serialize;

pub const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
pub const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";
pub const MALFORMED_BODY_TITLE: &str = "The request body is not valid JSON.";

pub const SERVICE_UNAVAILABLE_PROBLEM_TYPE: &str =
    "https://tools.ietf.org/html/rfc9110#section-15.6.4";
pub const SERVICE_UNAVAILABLE_TITLE: &str = "The GitHub identity check could not be completed.";

pub const INTERNAL_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";
pub const INTERNAL_TITLE: &str = "An internal error occurred.";

/// RFC 9457 problem body
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: &'static str,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field name to messages, in the order the fields were checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ProblemDetails {
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            problem_type: VALIDATION_PROBLEM_TYPE,
            title: VALIDATION_PROBLEM_TITLE,
            status: 400,
            detail: None,
            errors: Some(errors),
        }
    }

    pub fn malformed_body(detail: String) -> Self {
        Self {
            problem_type: VALIDATION_PROBLEM_TYPE,
            title: MALFORMED_BODY_TITLE,
            status: 400,
            detail: Some(detail),
            errors: None,
        }
    }

    pub fn service_unavailable() -> Self {
        Self {
            problem_type: SERVICE_UNAVAILABLE_PROBLEM_TYPE,
            title: SERVICE_UNAVAILABLE_TITLE,
            status: 503,
            detail: None,
            errors: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            problem_type: INTERNAL_PROBLEM_TYPE,
            title: INTERNAL_TITLE,
            status: 500,
            detail: None,
            errors: None,
        }
    }
}
