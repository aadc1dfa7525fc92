//! Field-level validation errors
//!
//! Validators collect every failing field instead of stopping at the first
//! one. The collected list is rendered as the body of a `400 Bad Request`:
//!
//! ```json
//! [
//!   { "propertyName": "Isbn", "errorMessage": "Value was not a valid ISBN-13" },
//!   { "propertyName": "Title", "errorMessage": "'Title' must not be empty." }
//! ]
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// A single failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[schema(example = "Isbn")]
    pub property_name: String,
    pub error_message: String,
}

impl ValidationError {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }
}

/// Every failing field of one request, in the order the checks ran
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding exactly one failure
    pub fn single(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self(vec![ValidationError::new(property_name, error_message)])
    }

    pub fn push(&mut self, property_name: impl Into<String>, error_message: impl Into<String>) {
        self.0.push(ValidationError::new(property_name, error_message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.property_name, error.error_message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Record `"'<display_name>' must not be empty."` when `value` is blank
pub fn validate_required(
    errors: &mut ValidationErrors,
    property_name: &str,
    display_name: &str,
    value: &str,
) {
    if value.trim().is_empty() {
        errors.push(property_name, format!("'{}' must not be empty.", display_name));
    }
}

/// Record `"'<display_name>' must be greater than '<min>'."` unless `value > min`
pub fn validate_greater_than(
    errors: &mut ValidationErrors,
    property_name: &str,
    display_name: &str,
    value: i64,
    min: i64,
) {
    if value <= min {
        errors.push(
            property_name,
            format!("'{}' must be greater than '{}'.", display_name, min),
        );
    }
}
