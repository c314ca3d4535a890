//! HTTPS enforcement: redirect plain-HTTP requests and send HSTS on secure ones.
//!
//! A request is secure when its URI scheme is `https` or a proxy in front of us
//! set `X-Forwarded-Proto: https`. Disabled entirely when `force_https` is off.

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const HSTS_VALUE: &str = "max-age=31556926; includeSubDomains";

pub async fn enforce_https(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.config.force_https {
        return next.run(request).await;
    }
    if !is_secure(request.uri(), request.headers()) {
        return match https_location(request.uri(), request.headers()) {
            Some(location) => {
                tracing::debug!(%location, "redirecting to https");
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            None => (StatusCode::BAD_REQUEST, "missing Host header").into_response(),
        };
    }
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS_VALUE));
    response
}

fn is_secure(uri: &Uri, headers: &HeaderMap) -> bool {
    if uri.scheme_str() == Some("https") {
        return true;
    }
    headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|proto| proto.trim().eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

/// Same host, path and query under `https://`. `None` when the host is unknown.
fn https_location(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .filter(|h| !h.is_empty())?;
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Some(format!("https://{}{}", host, path_and_query))
}
