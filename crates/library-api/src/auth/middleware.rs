//! Request guard enforcing the API key

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::{Authenticator, INVALID_API_KEY};
use crate::error::AppError;

/// Reject requests without a valid `Authorization` header
///
/// On success the caller's [`super::Identity`] is inserted into the request
/// extensions. The presented value is never logged.
pub async fn require_api_key(
    State(authenticator): State<Arc<dyn Authenticator>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credential = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.as_bytes());

    match authenticator.authenticate(credential) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        },
        Err(reason) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                %reason,
                "Rejected unauthenticated request"
            );
            Err(AppError::Unauthorized(INVALID_API_KEY.to_string()))
        },
    }
}
