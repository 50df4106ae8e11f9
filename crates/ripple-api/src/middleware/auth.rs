//! Bearer-token gate applied to protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use ripple_auth::AccessGate;

use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Rejects the request unless it carries a valid access token.
///
/// On success the caller's identity is stored as a [`CurrentUser`] request
/// extension; the handler never runs on failure.
pub async fn require_auth(
    State(gate): State<Arc<AccessGate>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // A non-UTF-8 header is present but unusable.
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    let identity = gate.authenticate(header)?;

    request.extensions_mut().insert(CurrentUser(identity));
    Ok(next.run(request).await)
}
