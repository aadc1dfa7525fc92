use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::put,
    Json, Router,
};
use std::sync::Arc;

use crate::api::{AppState, EndpointRegistration};
use crate::features::books::{
    model::{Book, BookRequest},
    repository::BookRepository,
    routes::add_book_services,
    routes::BookApiError,
    validation::validate_book,
};
use crate::features::shared::{ValidationError, ValidationErrors};

pub const ENDPOINT: EndpointRegistration = EndpointRegistration {
    name: "UpdateBook",
    add_services: add_book_services,
    define_routes,
};

fn define_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/books/:isbn", put(update_book))
}

/// Replace every field of an existing book
#[derive(Debug, Clone)]
pub struct UpdateBookCommand {
    pub book: BookRequest,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateBookError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Book with ISBN '{0}' not found")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateBookCommand {
    /// The ISBN from the route replaces whatever the body carried
    pub fn new(isbn: String, book: BookRequest) -> Self {
        Self {
            book: BookRequest { isbn, ..book },
        }
    }

    pub fn validate(&self) -> Result<Book, UpdateBookError> {
        validate_book(&self.book).map_err(UpdateBookError::Validation)
    }
}

#[tracing::instrument(skip(repo, command), fields(isbn = %command.book.isbn))]
pub async fn handle(
    repo: &dyn BookRepository,
    command: UpdateBookCommand,
) -> Result<Book, UpdateBookError> {
    let book = command.validate()?;

    if !repo.update(&book).await? {
        return Err(UpdateBookError::NotFound(book.isbn));
    }

    Ok(book)
}

/// Update an existing book
///
/// # Endpoint
///
/// `PUT /books/:isbn`
///
/// # Response
///
/// - `200 OK` - Updated book
/// - `400 Bad Request` - Validation error or unreadable body
/// - `404 Not Found` - No book with this ISBN
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "Books",
    params(("isbn" = String, Path, description = "ISBN-13 of the book to replace")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Validation failed", body = Vec<ValidationError>),
        (status = 401, description = "Missing or wrong API key"),
        (status = 404, description = "No book with this ISBN")
    ),
    security(("api_key" = []))
)]
#[tracing::instrument(skip(books, body), fields(isbn = %isbn))]
pub async fn update_book(
    State(books): State<Arc<dyn BookRepository>>,
    Path(isbn): Path<String>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Response, BookApiError> {
    let Json(request) = body?;

    let book = handle(books.as_ref(), UpdateBookCommand::new(isbn, request)).await?;

    tracing::info!(isbn = %book.isbn, "Book updated via API");

    Ok(Json(book).into_response())
}
