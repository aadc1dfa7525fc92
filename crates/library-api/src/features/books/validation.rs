//! Book validation rules
//!
//! Every rule runs; failures are collected rather than returned one by one.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{release_date, Book, BookRequest};
use crate::features::shared::validation::{
    validate_greater_than, validate_required, ValidationErrors,
};

pub const INVALID_ISBN_MESSAGE: &str = "Value was not a valid ISBN-13";
pub const DUPLICATE_ISBN_MESSAGE: &str = "A book with this ISBN-13 already exists.";
pub const INVALID_RELEASE_DATE_MESSAGE: &str = "'Release Date' must be a date in the format YYYY-MM-DD.";

/// Three digits, a hyphen, ten digits
static ISBN_13: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{10}$").expect("ISBN pattern compiles"));

pub fn is_valid_isbn(isbn: &str) -> bool {
    ISBN_13.is_match(isbn)
}

/// Check every field and build the [`Book`] when all of them pass
pub fn validate_book(request: &BookRequest) -> Result<Book, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !is_valid_isbn(&request.isbn) {
        errors.push("Isbn", INVALID_ISBN_MESSAGE);
    }
    validate_required(&mut errors, "Title", "Title", &request.title);
    validate_required(&mut errors, "Author", "Author", &request.author);
    validate_greater_than(
        &mut errors,
        "PageCount",
        "Page Count",
        i64::from(request.page_count),
        0,
    );
    let release_date = request.release_date.as_deref().and_then(release_date::parse);
    if release_date.is_none() {
        errors.push("ReleaseDate", INVALID_RELEASE_DATE_MESSAGE);
    }

    match release_date {
        Some(release_date) if errors.is_empty() => Ok(Book {
            isbn: request.isbn.clone(),
            title: request.title.clone(),
            author: request.author.clone(),
            short_description: request.short_description.clone(),
            page_count: request.page_count,
            release_date,
        }),
        _ => Err(errors),
    }
}
