//! Application host
//!
//! [`build_app`] turns a [`Config`] and a connection pool into a ready
//! router: services first, then routes, then middleware. Layers run
//! outermost first as CORS, request tracing, API key check. The Swagger UI
//! is merged before the layers, so it needs the key as well.

pub mod docs;
pub mod endpoints;
pub mod response;
pub mod services;

use std::sync::Arc;

use axum::{extract::FromRef, middleware::from_fn_with_state, Router};
use sqlx::SqlitePool;

use crate::auth::{middleware::require_api_key, Authenticator, SharedSecretAuthenticator};
use crate::config::Config;
use crate::error::AppError;
use crate::features::books::repository::BookRepository;
use crate::middleware::{cors_layer, tracing_layer};

pub use endpoints::{EndpointRegistration, ENDPOINTS};
pub use services::{ServiceCollection, ServiceError};

/// State handed to every handler
#[derive(Clone, FromRef)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
    pub authenticator: Arc<dyn Authenticator>,
}

/// Compose the application router
pub fn build_app(config: &Config, pool: SqlitePool) -> Result<Router, ServiceError> {
    let mut services = ServiceCollection::new(pool);

    let api_key = config.auth.api_key.clone();
    services.try_add_authenticator(move || Arc::new(SharedSecretAuthenticator::new(api_key)));
    endpoints::add_endpoint_services(ENDPOINTS, &mut services, config);

    let state = services.build()?;
    let authenticator = state.authenticator.clone();

    let router = endpoints::use_endpoints(ENDPOINTS, Router::new())
        .merge(docs::swagger_ui())
        .fallback(route_not_found)
        .with_state(state)
        .layer(from_fn_with_state(authenticator, require_api_key))
        .layer(tracing_layer())
        .layer(cors_layer(&config.cors));

    tracing::info!(endpoints = ENDPOINTS.len(), "Application router built");

    Ok(router)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("The requested resource does not exist".to_string())
}
