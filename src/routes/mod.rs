//! Router assembly and edge middleware.

pub mod account;
pub mod common;

pub use account::account_routes;
pub use common::common_routes;

use crate::middleware::{enforce_https, json_payload_too_large, security_headers};
use crate::state::AppState;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Request bodies larger than this are rejected with 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: common and account routes behind HTTPS enforcement, security headers,
/// tracing and CORS. CORS and security headers sit outside the redirect so every response carries them.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(account_routes())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(from_fn(json_payload_too_large))
        .layer(from_fn_with_state(state.clone(), enforce_https))
        .layer(from_fn(security_headers))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
