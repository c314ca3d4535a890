//! Common routes: index, health, readiness.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Account REST API Service";

#[derive(Serialize)]
struct IndexBody {
    name: &'static str,
    version: &'static str,
    paths: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn index() -> Json<IndexBody> {
    Json(IndexBody {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        paths: crate::handlers::ACCOUNTS_PATH,
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.store.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "OK",
        database: "ok",
    }))
}

/// GET /, GET /health, GET /ready.
pub fn common_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
}
