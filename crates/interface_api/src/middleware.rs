//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use domain_fees::Actor;
use tracing::info;

use crate::AppState;

/// Actor attribution middleware
///
/// Resolves the acting user from the X-Actor header, falling back to the
/// configured default, and stores it in request extensions for handlers.
pub async fn actor_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let actor = request
        .headers()
        .get("X-Actor")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Actor::new)
        .unwrap_or_else(|| Actor::new(state.config.default_actor.clone()));

    request.extensions_mut().insert(actor);
    next.run(request).await
}

/// Audit logging middleware
///
/// Logs all API requests with the resolved actor for the audit trail
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let actor = request
        .extensions()
        .get::<Actor>()
        .map(|a| a.as_str().to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        actor = %actor,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
