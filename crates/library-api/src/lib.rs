//! Library API
//!
//! HTTP service exposing a catalog of books, keyed by ISBN-13, over a
//! SQLite store.
//!
//! # Overview
//!
//! - **API Endpoints**: create, get, list/search, update and delete books
//! - **Authentication**: shared API key in the `Authorization` header
//! - **Database**: SQLite through SQLx, schema created at startup
//! - **Configuration**: defaults, `library.toml` and `LIBRARY_*` variables
//! - **Middleware**: CORS and request tracing
//!
//! # Architecture
//!
//! Each operation is a command (create, update, delete) or query (get,
//! list) under [`features::books`]. Every one of them exports an
//! [`api::EndpointRegistration`]; the host in [`api`] registers their
//! services and routes from the static [`api::ENDPOINTS`] list.
//!
//! # Example
//!
//! ```no_run
//! use library_api::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::DatabaseInitializer::new(pool.clone()).initialize().await?;
//!     let app = api::build_app(&config, pool)?;
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;

pub use config::Config;
pub use error::AppError;
