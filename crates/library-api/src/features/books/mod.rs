//! Book catalog
//!
//! - `POST /books` - Create a book
//! - `GET /books?searchTerm=` - List books, optionally filtered by title
//! - `GET /books/:isbn` - Get a single book
//! - `PUT /books/:isbn` - Replace a book
//! - `DELETE /books/:isbn` - Delete a book

pub mod commands;
pub mod model;
pub mod queries;
pub mod repository;
pub mod routes;
pub mod validation;

pub use model::Book;
pub use repository::{BookRepository, SqliteBookRepository};
pub use routes::{add_book_services, BookApiError};
