use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::delete,
    Router,
};
use std::sync::Arc;

use crate::api::{AppState, EndpointRegistration};
use crate::features::books::{
    repository::BookRepository, routes::add_book_services, routes::BookApiError,
};

pub const ENDPOINT: EndpointRegistration = EndpointRegistration {
    name: "DeleteBook",
    add_services: add_book_services,
    define_routes,
};

fn define_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/books/:isbn", delete(delete_book))
}

#[derive(Debug, Clone)]
pub struct DeleteBookCommand {
    pub isbn: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteBookError {
    #[error("Book with ISBN '{0}' not found")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn BookRepository,
    command: DeleteBookCommand,
) -> Result<(), DeleteBookError> {
    if !repo.delete(&command.isbn).await? {
        return Err(DeleteBookError::NotFound(command.isbn));
    }
    Ok(())
}

/// Delete a book
///
/// # Endpoint
///
/// `DELETE /books/:isbn`
///
/// # Response
///
/// - `204 No Content` - Book deleted
/// - `404 Not Found` - No book with this ISBN
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "Books",
    params(("isbn" = String, Path, description = "ISBN-13 of the book to delete")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 401, description = "Missing or wrong API key"),
        (status = 404, description = "No book with this ISBN")
    ),
    security(("api_key" = []))
)]
#[tracing::instrument(skip(books), fields(isbn = %isbn))]
pub async fn delete_book(
    State(books): State<Arc<dyn BookRepository>>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, BookApiError> {
    handle(books.as_ref(), DeleteBookCommand { isbn: isbn.clone() }).await?;

    tracing::info!(isbn = %isbn, "Book deleted via API");

    Ok(StatusCode::NO_CONTENT)
}
