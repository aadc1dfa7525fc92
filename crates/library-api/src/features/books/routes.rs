//! Error mapping and service registration shared by the book endpoints
//!
//! Handlers live next to the command or query they run; this module turns
//! their errors into responses:
//!
//! - validation failures: `400` with the field error array
//! - duplicate ISBN on create: `400` with a single `Isbn` entry
//! - unreadable body: `400` with a single `$` entry
//! - missing book: `404` envelope
//! - store failure: `500` envelope, details logged only

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};

use super::{
    commands::{CreateBookError, DeleteBookError, UpdateBookError},
    queries::{GetBookError, ListBooksError},
    repository::SqliteBookRepository,
    validation::DUPLICATE_ISBN_MESSAGE,
};
use crate::api::ServiceCollection;
use crate::config::Config;
use crate::error::AppError;
use crate::features::shared::ValidationErrors;

/// Register the book repository (once, however many endpoints ask)
pub fn add_book_services(services: &mut ServiceCollection, _config: &Config) {
    if services.try_add_books(|pool| Arc::new(SqliteBookRepository::new(pool.clone()))) {
        tracing::debug!("Book repository registered");
    }
}

/// Unified error type for book API endpoints
#[derive(Debug)]
pub enum BookApiError {
    Create(CreateBookError),
    Update(UpdateBookError),
    Delete(DeleteBookError),
    Get(GetBookError),
    List(ListBooksError),
    MalformedBody(JsonRejection),
}

impl From<CreateBookError> for BookApiError {
    fn from(err: CreateBookError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateBookError> for BookApiError {
    fn from(err: UpdateBookError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteBookError> for BookApiError {
    fn from(err: DeleteBookError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetBookError> for BookApiError {
    fn from(err: GetBookError) -> Self {
        Self::Get(err)
    }
}

impl From<ListBooksError> for BookApiError {
    fn from(err: ListBooksError) -> Self {
        Self::List(err)
    }
}

impl From<JsonRejection> for BookApiError {
    fn from(err: JsonRejection) -> Self {
        Self::MalformedBody(err)
    }
}

fn not_found(isbn: &str) -> Response {
    AppError::NotFound(format!("Book with ISBN '{}' not found", isbn)).into_response()
}

impl IntoResponse for BookApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateBookError::Validation(errors))
            | Self::Update(UpdateBookError::Validation(errors)) => errors.into_response(),
            Self::Create(CreateBookError::AlreadyExists(_)) => {
                ValidationErrors::single("Isbn", DUPLICATE_ISBN_MESSAGE).into_response()
            },

            Self::Update(UpdateBookError::NotFound(isbn))
            | Self::Delete(DeleteBookError::NotFound(isbn))
            | Self::Get(GetBookError::NotFound(isbn)) => not_found(&isbn),

            Self::Create(CreateBookError::Database(e))
            | Self::Update(UpdateBookError::Database(e))
            | Self::Delete(DeleteBookError::Database(e))
            | Self::Get(GetBookError::Database(e))
            | Self::List(ListBooksError::Database(e)) => AppError::Database(e).into_response(),

            Self::MalformedBody(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable request body");
                ValidationErrors::single("$", rejection.body_text()).into_response()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let duplicate = BookApiError::from(CreateBookError::AlreadyExists("978-0000000001".into()));
        assert_eq!(duplicate.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = BookApiError::from(DeleteBookError::NotFound("978-0000000001".into()));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let failed = BookApiError::from(ListBooksError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(failed.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
