//! Shared utilities and types for feature modules
//!
//! - **validation**: Field-level validation errors and helpers
//! - **error_helpers**: Database error classification
//! - **test_helpers**: Test fixtures (test-only)

pub mod error_helpers;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{ValidationError, ValidationErrors};
