//! Connection factory for the relational store
//!
//! Turns a [`DatabaseConfig`] connection string into a pooled SQLite handle.
//! Schema creation lives in [`initializer`].

pub mod initializer;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

pub use initializer::DatabaseInitializer;

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Connection string could not be understood
    #[error("Database configuration error: {0}. Check the database url setting.")]
    Config(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Open a connection pool for the configured store
///
/// File databases are created on first use. An in-memory database lives
/// only as long as its connection, so the pool is pinned to a single
/// connection that never expires.
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DbError::Config(format!("invalid url '{}': {}", config.url, e)))?
        .create_if_missing(true);

    let in_memory = is_in_memory(&config.url);
    let mut pool_options = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs));

    pool_options = if in_memory {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        in_memory,
        connections = pool.size(),
        "Database connection pool created"
    );

    Ok(pool)
}

/// Cheap connectivity check
pub async fn health_check(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
