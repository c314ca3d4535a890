//! Account CRUD routes.

use crate::handlers::account::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET/POST /accounts, GET/PUT/DELETE /accounts/:id.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list).post(create))
        .route(
            "/accounts/:id",
            get(read).put(update).delete(delete_handler),
        )
}
