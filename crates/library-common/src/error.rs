//! Error types shared by the library workspace crates

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, CommonError>;

/// Errors raised by the shared crate
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Invalid value '{value}' for setting {setting}")]
    InvalidSetting { setting: &'static str, value: String },

    #[error("Failed to initialize logging: {0}")]
    LogInit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommonError {
    pub fn invalid_setting(setting: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting,
            value: value.into(),
        }
    }
}
