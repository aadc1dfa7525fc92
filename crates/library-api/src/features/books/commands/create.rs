use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use std::sync::Arc;

use crate::api::{AppState, EndpointRegistration};
use crate::auth::Identity;
use crate::features::books::{
    model::{Book, BookRequest},
    repository::BookRepository,
    routes::add_book_services,
    routes::BookApiError,
    validation::validate_book,
};
use crate::features::shared::{ValidationError, ValidationErrors};

pub const ENDPOINT: EndpointRegistration = EndpointRegistration {
    name: "CreateBook",
    add_services: add_book_services,
    define_routes,
};

fn define_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/books", post(create_book))
}

#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    pub book: BookRequest,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateBookError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Book with ISBN '{0}' already exists")]
    AlreadyExists(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateBookCommand {
    pub fn validate(&self) -> Result<Book, CreateBookError> {
        validate_book(&self.book).map_err(CreateBookError::Validation)
    }
}

#[tracing::instrument(skip(repo, command), fields(isbn = %command.book.isbn))]
pub async fn handle(
    repo: &dyn BookRepository,
    command: CreateBookCommand,
) -> Result<Book, CreateBookError> {
    let book = command.validate()?;

    if !repo.create(&book).await? {
        return Err(CreateBookError::AlreadyExists(book.isbn));
    }

    Ok(book)
}

/// Create a new book
///
/// # Endpoint
///
/// `POST /books`
///
/// # Response
///
/// - `201 Created` - Book stored, `Location: /books/{isbn}`
/// - `400 Bad Request` - Validation error, duplicate ISBN or unreadable body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/books",
    tag = "Books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Validation failed or ISBN taken", body = Vec<ValidationError>),
        (status = 401, description = "Missing or wrong API key")
    ),
    security(("api_key" = []))
)]
#[tracing::instrument(skip_all, fields(caller = %identity.name))]
pub async fn create_book(
    State(books): State<Arc<dyn BookRepository>>,
    Extension(identity): Extension<Identity>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Response, BookApiError> {
    let Json(request) = body?;

    let book = handle(books.as_ref(), CreateBookCommand { book: request }).await?;

    tracing::info!(isbn = %book.isbn, title = %book.title, "Book created via API");

    let location = format!("/books/{}", book.isbn);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)).into_response())
}
