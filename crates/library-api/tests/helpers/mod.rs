//! Shared setup for the HTTP integration tests
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    response::Response,
    Router,
};
use library_api::{
    api,
    config::Config,
    db::{self, DatabaseInitializer},
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const API_KEY: &str = "test-api-key";

/// Router over a fresh in-memory database, keyed with [`API_KEY`]
pub async fn setup_test_app() -> Router {
    setup_test_app_with_key(API_KEY).await
}

pub async fn setup_test_app_with_key(api_key: &str) -> Router {
    let mut config = Config::default();
    config.auth.api_key = api_key.to_string();
    config.database.url = "sqlite::memory:".to_string();

    let pool = db::create_pool(&config.database).await.unwrap();
    DatabaseInitializer::new(pool.clone())
        .initialize()
        .await
        .unwrap();

    api::build_app(&config, pool).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

/// Send a request with the valid API key
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    send_with_key(app, method, uri, body, Some(API_KEY)).await
}

pub async fn send_with_key(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    api_key: Option<&str>,
) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        request = request.header(header::AUTHORIZATION, key);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

/// `GET` with an `Authorization` header built from raw bytes
pub async fn get_with_key_bytes(app: &Router, uri: &str, api_key: &[u8]) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, HeaderValue::from_bytes(api_key).unwrap())
        .body(Body::empty())
        .unwrap();

    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

/// Send a raw, possibly broken, JSON body
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

async fn into_test_response(response: Response) -> TestResponse {
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        location,
        body,
    }
}

pub fn book_json(isbn: &str, title: &str) -> Value {
    json!({
        "isbn": isbn,
        "title": title,
        "author": "Ursula K. Le Guin",
        "shortDescription": "An anarchist utopia",
        "pageCount": 387,
        "releaseDate": "1974-05-01"
    })
}
