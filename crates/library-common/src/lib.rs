//! Library Common
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the library workspace: logging setup and the error
//! type it reports through.
//!
//! # Example
//!
//! ```no_run
//! use library_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> library_common::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     let _guard = init_logging(&config)?;
//!     tracing::info!("Application started");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{CommonError, Result};
