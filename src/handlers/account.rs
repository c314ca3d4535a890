//! Account CRUD handlers: create, read, update, delete, list.

use crate::error::AppError;
use crate::extractors::AccountJson;
use crate::model::AccountPayload;
use crate::response::{created_at, no_content, ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub const ACCOUNTS_PATH: &str = "/accounts";

/// `Ok(None)` for an integer no row can have (outside the `SERIAL` range).
fn parse_id(id_str: &str) -> Result<Option<i32>, AppError> {
    let n: i64 = id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))?;
    Ok(i32::try_from(n).ok())
}

fn not_found(id_str: &str) -> AppError {
    AppError::NotFound(format!("account with id [{}]", id_str))
}

/// Read path of a single account, used as the `Location` of a created one.
pub fn account_location(id: i32) -> String {
    format!("{}/{}", ACCOUNTS_PATH, id)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list().await?;
    tracing::debug!(count = rows.len(), "listed accounts");
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    AccountJson(body): AccountJson<AccountPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(&body)?;
    let row = state.store.insert(body).await?;
    tracing::info!(id = row.id, "account created");
    Ok(created_at(&account_location(row.id), row))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?.ok_or_else(|| not_found(&id_str))?;
    let row = state
        .store
        .fetch(id)
        .await?
        .ok_or_else(|| not_found(&id_str))?;
    Ok(ok(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    AccountJson(body): AccountJson<AccountPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?.ok_or_else(|| not_found(&id_str))?;
    RequestValidator::validate(&body)?;
    let row = state
        .store
        .update(id, body)
        .await?
        .ok_or_else(|| not_found(&id_str))?;
    tracing::info!(id, "account updated");
    Ok(ok(row))
}

/// Always 204: deleting an id that does not exist is not an error.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Some(id) = parse_id(&id_str)? else {
        return Ok(no_content());
    };
    let existed = state.store.delete(id).await?;
    tracing::info!(id, existed, "account deleted");
    Ok(no_content())
}
