use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::api::{AppState, EndpointRegistration};
use crate::features::books::{
    model::Book, repository::BookRepository, routes::add_book_services, routes::BookApiError,
};

pub const ENDPOINT: EndpointRegistration = EndpointRegistration {
    name: "GetBook",
    add_services: add_book_services,
    define_routes,
};

fn define_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/books/:isbn", get(get_book))
}

#[derive(Debug, Clone)]
pub struct GetBookQuery {
    pub isbn: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetBookError {
    #[error("Book with ISBN '{0}' not found")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(repo: &dyn BookRepository, query: GetBookQuery) -> Result<Book, GetBookError> {
    let found = repo.get_by_isbn(&query.isbn).await?;
    match found {
        Some(book) => Ok(book),
        None => Err(GetBookError::NotFound(query.isbn)),
    }
}

/// Get a single book by ISBN
///
/// # Endpoint
///
/// `GET /books/:isbn`
///
/// # Response
///
/// - `200 OK` - Book found
/// - `404 Not Found` - No book with this ISBN
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "Books",
    params(("isbn" = String, Path, description = "ISBN-13 of the book")),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 401, description = "Missing or wrong API key"),
        (status = 404, description = "No book with this ISBN")
    ),
    security(("api_key" = []))
)]
#[tracing::instrument(skip(books), fields(isbn = %isbn))]
pub async fn get_book(
    State(books): State<Arc<dyn BookRepository>>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, BookApiError> {
    let book = handle(books.as_ref(), GetBookQuery { isbn }).await?;

    tracing::debug!(isbn = %book.isbn, "Book retrieved via API");

    Ok(Json(book))
}
