//! Combined router for the auth flow and the read API

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::state::AuthState;

/// Create a router serving every Tourvisto loader
///
/// - `/auth/google`, `/auth/callback`, `/auth/logout`
/// - `/api/user`, `/api/users`, `/api/trips`, `/api/trips/{id}`
///
/// Requests are traced with `tower-http`'s `TraceLayer`.
pub fn tourvisto_router(state: AuthState) -> Router {
    tourvisto_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`tourvisto_router`] without the HTTP tracing middleware
pub fn tourvisto_router_no_trace(state: AuthState) -> Router {
    Router::new()
        .nest("/auth", super::auth::router())
        .nest("/api", super::api::router())
        .with_state(state)
}
