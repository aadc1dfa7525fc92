//! API response bodies
//!
//! Successful responses carry the resource itself. Failures use one of two
//! shapes: a bare array of field errors for validation (see
//! [`crate::features::shared::validation`]) and the envelope below for
//! everything else.

use serde::Serialize;

/// Error envelope for non-validation failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
