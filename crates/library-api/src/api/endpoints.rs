//! Endpoint registry
//!
//! Every endpoint module exports a static [`EndpointRegistration`]. The host
//! walks [`ENDPOINTS`] twice at startup: first to register services, then,
//! once the services are built into [`AppState`], to add routes.

use axum::Router;

use super::services::ServiceCollection;
use super::AppState;
use crate::config::Config;
use crate::features::books::{commands, queries};

/// Startup hooks of one endpoint
#[derive(Clone, Copy)]
pub struct EndpointRegistration {
    /// Operation name used in logs
    pub name: &'static str,
    /// Register the services this endpoint needs; must tolerate being
    /// called after a sibling endpoint registered the same service
    pub add_services: fn(&mut ServiceCollection, &Config),
    /// Add the endpoint's verb and route template
    pub define_routes: fn(Router<AppState>) -> Router<AppState>,
}

impl std::fmt::Debug for EndpointRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointRegistration")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Every endpoint served by the application
pub const ENDPOINTS: &[EndpointRegistration] = &[
    commands::create::ENDPOINT,
    queries::get::ENDPOINT,
    queries::list::ENDPOINT,
    commands::update::ENDPOINT,
    commands::delete::ENDPOINT,
];

/// Run `add_services` of every registration
pub fn add_endpoint_services(
    endpoints: &[EndpointRegistration],
    services: &mut ServiceCollection,
    config: &Config,
) {
    for endpoint in endpoints {
        (endpoint.add_services)(services, config);
        tracing::debug!(endpoint = endpoint.name, "Endpoint services registered");
    }
}

/// Run `define_routes` of every registration
pub fn use_endpoints(
    endpoints: &[EndpointRegistration],
    mut router: Router<AppState>,
) -> Router<AppState> {
    for endpoint in endpoints {
        router = (endpoint.define_routes)(router);
        tracing::debug!(endpoint = endpoint.name, "Endpoint routes defined");
    }
    router
}
