//! Book persistence
//!
//! [`BookRepository`] is the seam between the endpoints and the store. Each
//! method is one statement against the `Books` table; lists come back
//! ordered by title, then ISBN. Title search folds case in Rust over the
//! full listing, since SQLite's `LOWER` only knows ASCII.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::model::Book;
use crate::features::shared::error_helpers::is_unique_violation;

const SELECT_COLUMNS: &str =
    "SELECT Isbn, Title, Author, ShortDescription, PageCount, ReleaseDate FROM Books";

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new book; `false` when the ISBN is already taken
    async fn create(&self, book: &Book) -> Result<bool, sqlx::Error>;

    async fn get_by_isbn(&self, isbn: &str) -> Result<Option<Book>, sqlx::Error>;

    async fn get_all(&self) -> Result<Vec<Book>, sqlx::Error>;

    /// Case-insensitive substring match on the title
    async fn search_by_title(&self, term: &str) -> Result<Vec<Book>, sqlx::Error>;

    /// Replace every field of the book with this ISBN; `false` when absent
    async fn update(&self, book: &Book) -> Result<bool, sqlx::Error>;

    /// `false` when no book has this ISBN
    async fn delete(&self, isbn: &str) -> Result<bool, sqlx::Error>;
}

/// [`BookRepository`] backed by SQLite
#[derive(Clone)]
pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn create(&self, book: &Book) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO Books (Isbn, Title, Author, ShortDescription, PageCount, ReleaseDate)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.short_description)
        .bind(book.page_count)
        .bind(book.release_date)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(isbn = %book.isbn, "Insert rejected by primary key");
                Ok(false)
            },
            Err(e) => Err(e),
        }
    }

    async fn get_by_isbn(&self, isbn: &str) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(&format!("{SELECT_COLUMNS} WHERE Isbn = ?1"))
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_all(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(&format!("{SELECT_COLUMNS} ORDER BY Title, Isbn"))
            .fetch_all(&self.pool)
            .await
    }

    async fn search_by_title(&self, term: &str) -> Result<Vec<Book>, sqlx::Error> {
        let term = term.to_lowercase();
        let mut books = self.get_all().await?;
        books.retain(|book| book.title.to_lowercase().contains(&term));
        Ok(books)
    }

    async fn update(&self, book: &Book) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE Books
            SET Title = ?2,
                Author = ?3,
                ShortDescription = ?4,
                PageCount = ?5,
                ReleaseDate = ?6
            WHERE Isbn = ?1
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.short_description)
        .bind(book.page_count)
        .bind(book.release_date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, isbn: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM Books WHERE Isbn = ?1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
