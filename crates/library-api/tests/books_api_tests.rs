//! HTTP tests for the book endpoints
//!
//! Each test drives the full router (auth, CORS and tracing layers
//! included) against its own in-memory database.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod helpers;

use helpers::{book_json, send, send_raw, setup_test_app};

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_returns_201_with_location() {
    let app = setup_test_app().await;
    let book = book_json("978-0061054884", "The Dispossessed");

    let response = send(&app, Method::POST, "/books", Some(book.clone())).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.location.as_deref(), Some("/books/978-0061054884"));
    assert_eq!(response.body, book);
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = setup_test_app().await;
    let book = book_json("978-0061054884", "The Dispossessed");

    send(&app, Method::POST, "/books", Some(book.clone())).await;
    let response = send(&app, Method::GET, "/books/978-0061054884", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, book);
}

#[tokio::test]
async fn test_create_with_invalid_isbn_returns_400() {
    let app = setup_test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/books",
        Some(book_json("INVALID", "The Dispossessed")),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!([{ "propertyName": "Isbn", "errorMessage": "Value was not a valid ISBN-13" }])
    );
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let app = setup_test_app().await;
    let body = json!({
        "isbn": "978-0061054884",
        "title": "",
        "author": "  ",
        "pageCount": 0,
        "releaseDate": "1974-05-01"
    });

    let response = send(&app, Method::POST, "/books", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!([
            { "propertyName": "Title", "errorMessage": "'Title' must not be empty." },
            { "propertyName": "Author", "errorMessage": "'Author' must not be empty." },
            { "propertyName": "PageCount", "errorMessage": "'Page Count' must be greater than '0'." }
        ])
    );
}

#[tokio::test]
async fn test_create_duplicate_returns_400() {
    let app = setup_test_app().await;
    let book = book_json("978-0061054884", "The Dispossessed");

    let first = send(&app, Method::POST, "/books", Some(book.clone())).await;
    let second = send(&app, Method::POST, "/books", Some(book)).await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.body,
        json!([{ "propertyName": "Isbn", "errorMessage": "A book with this ISBN-13 already exists." }])
    );
}

#[tokio::test]
async fn test_create_accepts_property_names_in_any_case() {
    let app = setup_test_app().await;
    let body = json!({
        "ISBN": "978-0061054884",
        "Title": "The Dispossessed",
        "author": "Ursula K. Le Guin",
        "PAGECOUNT": 387,
        "ReleaseDate": "1974-05-01"
    });

    let response = send(&app, Method::POST, "/books", Some(body)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["isbn"], "978-0061054884");
    assert_eq!(response.body["pageCount"], 387);
    assert_eq!(response.body["releaseDate"], "1974-05-01");
    assert_eq!(response.body["shortDescription"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_rejects_timestamp_release_date() {
    let app = setup_test_app().await;

    for release_date in ["1974-05-01T00:00:00Z", "1974-05-01T23:00:00", "May 1974"] {
        let mut body = book_json("978-0061054884", "The Dispossessed");
        body["releaseDate"] = json!(release_date);

        let response = send(&app, Method::POST, "/books", Some(body)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", release_date);
        assert_eq!(
            response.body,
            json!([{
                "propertyName": "ReleaseDate",
                "errorMessage": "'Release Date' must be a date in the format YYYY-MM-DD."
            }])
        );
    }

    let listed = send(&app, Method::GET, "/books", None).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_create_without_release_date_reports_field() {
    let app = setup_test_app().await;
    let mut body = book_json("978-0061054884", "The Dispossessed");
    body.as_object_mut().unwrap().remove("releaseDate");

    let response = send(&app, Method::POST, "/books", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body[0]["propertyName"], "ReleaseDate");
}

#[tokio::test]
async fn test_malformed_body_returns_400_with_root_property() {
    let app = setup_test_app().await;

    let response = send_raw(&app, Method::POST, "/books", "{ not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body[0]["propertyName"], "$");
}

#[tokio::test]
async fn test_wrong_field_type_returns_400_with_root_property() {
    let app = setup_test_app().await;
    let mut body = book_json("978-0061054884", "The Dispossessed");
    body["pageCount"] = json!("many");

    let response = send(&app, Method::POST, "/books", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body[0]["propertyName"], "$");
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get_missing_book_returns_404() {
    let app = setup_test_app().await;

    let response = send(&app, Method::GET, "/books/978-0000000404", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"]["code"], "NOT_FOUND");
}

// ============================================================================
// List and search
// ============================================================================

#[tokio::test]
async fn test_list_returns_all_books_ordered_by_title() {
    let app = setup_test_app().await;
    for (isbn, title) in [
        ("978-0000000003", "The Left Hand of Darkness"),
        ("978-0000000001", "A Wizard of Earthsea"),
        ("978-0000000002", "The Dispossessed"),
    ] {
        send(&app, Method::POST, "/books", Some(book_json(isbn, title))).await;
    }

    let response = send(&app, Method::GET, "/books", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "A Wizard of Earthsea",
            "The Dispossessed",
            "The Left Hand of Darkness"
        ]
    );
}

#[tokio::test]
async fn test_list_on_empty_catalog_returns_empty_array() {
    let app = setup_test_app().await;

    let response = send(&app, Method::GET, "/books", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_search_matches_title_substring_case_insensitively() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/books", Some(book_json("978-0000000001", "A Wizard of Earthsea"))).await;
    send(&app, Method::POST, "/books", Some(book_json("978-0000000002", "The Tombs of Atuan"))).await;
    send(&app, Method::POST, "/books", Some(book_json("978-0000000003", "The Farthest Shore"))).await;

    let response = send(&app, Method::GET, "/books?searchTerm=EARTH", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let isbns: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["isbn"].as_str().unwrap())
        .collect();
    assert_eq!(isbns, vec!["978-0000000001"]);

    let none = send(&app, Method::GET, "/books?searchTerm=dragon", None).await;
    assert_eq!(none.body, json!([]));
}

#[tokio::test]
async fn test_search_folds_accented_titles() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/books", Some(book_json("978-0000000001", "ÉTUDES Françaises"))).await;
    send(&app, Method::POST, "/books", Some(book_json("978-0000000002", "Etudes"))).await;

    let response = send(&app, Method::GET, "/books?searchTerm=%C3%A9tudes", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["ÉTUDES Françaises"]);
}

#[tokio::test]
async fn test_empty_search_term_returns_all_books() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/books", Some(book_json("978-0000000001", "A Wizard of Earthsea"))).await;
    send(&app, Method::POST, "/books", Some(book_json("978-0000000002", "The Tombs of Atuan"))).await;

    let response = send(&app, Method::GET, "/books?searchTerm=", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_existing_book_returns_200() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/books", Some(book_json("978-0061054884", "The Dispossessed"))).await;

    let changed = book_json("978-0061054884", "The Dispossessed: An Ambiguous Utopia");
    let response = send(&app, Method::PUT, "/books/978-0061054884", Some(changed.clone())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, changed);

    let stored = send(&app, Method::GET, "/books/978-0061054884", None).await;
    assert_eq!(stored.body["title"], "The Dispossessed: An Ambiguous Utopia");
}

#[tokio::test]
async fn test_update_uses_isbn_from_route() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/books", Some(book_json("978-0061054884", "The Dispossessed"))).await;

    let mut body = book_json("978-9999999999", "Renamed");
    body.as_object_mut().unwrap().remove("isbn");
    let response = send(&app, Method::PUT, "/books/978-0061054884", Some(body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isbn"], "978-0061054884");
    assert_eq!(response.body["title"], "Renamed");
}

#[tokio::test]
async fn test_update_missing_book_returns_404() {
    let app = setup_test_app().await;

    let response = send(
        &app,
        Method::PUT,
        "/books/978-0000000404",
        Some(book_json("978-0000000404", "Nowhere")),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_invalid_book_returns_400() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/books", Some(book_json("978-0061054884", "The Dispossessed"))).await;

    let mut body = book_json("978-0061054884", "The Dispossessed");
    body["pageCount"] = json!(-1);
    let response = send(&app, Method::PUT, "/books/978-0061054884", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body[0]["propertyName"], "PageCount");
}

#[tokio::test]
async fn test_update_invalid_route_isbn_returns_400() {
    let app = setup_test_app().await;

    let response = send(
        &app,
        Method::PUT,
        "/books/INVALID",
        Some(book_json("978-0061054884", "The Dispossessed")),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!([{ "propertyName": "Isbn", "errorMessage": "Value was not a valid ISBN-13" }])
    );
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_existing_book_returns_204_then_404() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/books", Some(book_json("978-0061054884", "The Dispossessed"))).await;

    let deleted = send(&app, Method::DELETE, "/books/978-0061054884", None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(deleted.body, serde_json::Value::Null);

    let after = send(&app, Method::GET, "/books/978-0061054884", None).await;
    assert_eq!(after.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_book_returns_404() {
    let app = setup_test_app().await;

    let response = send(&app, Method::DELETE, "/books/978-0000000404", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_returns_404_envelope() {
    let app = setup_test_app().await;

    let response = send(&app, Method::GET, "/authors", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["code"], "NOT_FOUND");
}
