//! Startup schema creation

use sqlx::SqlitePool;

use super::DbResult;

/// Schema of the single `Books` table
pub const CREATE_BOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Books (
    Isbn TEXT PRIMARY KEY,
    Title TEXT NOT NULL,
    Author TEXT NOT NULL,
    ShortDescription TEXT,
    PageCount INTEGER NOT NULL,
    ReleaseDate TEXT NOT NULL
)
"#;

/// Creates the schema once at startup; safe to run against an existing database
pub struct DatabaseInitializer {
    pool: SqlitePool,
}

impl DatabaseInitializer {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn initialize(&self) -> DbResult<()> {
        sqlx::query(CREATE_BOOKS_TABLE).execute(&self.pool).await?;
        tracing::info!("Database schema initialized");
        Ok(())
    }
}
