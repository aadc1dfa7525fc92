use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use std::sync::Arc;

use crate::api::{AppState, EndpointRegistration};
use crate::features::books::{
    model::Book, repository::BookRepository, routes::add_book_services, routes::BookApiError,
};

pub const ENDPOINT: EndpointRegistration = EndpointRegistration {
    name: "ListBooks",
    add_services: add_book_services,
    define_routes,
};

fn define_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/books", get(list_books))
}

/// All books, or only those whose title contains `search_term`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksQuery {
    /// Case-insensitive part of the title
    #[serde(default, rename = "searchTerm", alias = "SearchTerm")]
    pub search_term: Option<String>,
}

impl ListBooksQuery {
    /// The term to filter on; blank terms mean no filter
    pub fn effective_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListBooksError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn BookRepository,
    query: ListBooksQuery,
) -> Result<Vec<Book>, ListBooksError> {
    let books = match query.effective_term() {
        Some(term) => repo.search_by_title(term).await?,
        None => repo.get_all().await?,
    };
    Ok(books)
}

/// List books, optionally filtered by title
///
/// # Endpoint
///
/// `GET /books?searchTerm=hobbit`
///
/// # Response
///
/// - `200 OK` - Array of books, ordered by title
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books",
    tag = "Books",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Books ordered by title", body = Vec<Book>),
        (status = 401, description = "Missing or wrong API key")
    ),
    security(("api_key" = []))
)]
#[tracing::instrument(skip(books, query), fields(search_term = ?query.search_term))]
pub async fn list_books(
    State(books): State<Arc<dyn BookRepository>>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<Vec<Book>>, BookApiError> {
    let found = handle(books.as_ref(), query).await?;

    tracing::debug!(count = found.len(), "Books listed via API");

    Ok(Json(found))
}
