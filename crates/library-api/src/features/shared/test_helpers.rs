//! Test helpers and fixtures for database tests

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::db::{create_pool, DatabaseInitializer};
use crate::features::books::model::{release_date, Book, BookRequest};

/// A fresh in-memory database with the schema applied
pub async fn memory_pool() -> SqlitePool {
    let pool = create_pool(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 5,
    })
    .await
    .expect("in-memory pool");

    DatabaseInitializer::new(pool.clone())
        .initialize()
        .await
        .expect("schema");

    pool
}

/// A book that passes validation
pub fn sample_book(isbn: &str) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: "The Pragmatic Programmer".to_string(),
        author: "Andrew Hunt".to_string(),
        short_description: Some("From journeyman to master".to_string()),
        page_count: 352,
        release_date: NaiveDate::from_ymd_opt(1999, 10, 20).expect("valid date"),
    }
}

/// The request body that validates into [`sample_book`]
pub fn sample_request(isbn: &str) -> BookRequest {
    request_for(&sample_book(isbn))
}

pub fn request_for(book: &Book) -> BookRequest {
    BookRequest {
        isbn: book.isbn.clone(),
        title: book.title.clone(),
        author: book.author.clone(),
        short_description: book.short_description.clone(),
        page_count: book.page_count,
        release_date: Some(book.release_date.format(release_date::FORMAT).to_string()),
    }
}
