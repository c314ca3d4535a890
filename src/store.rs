//! Account persistence: the `AccountStore` seam plus PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::{ensure_accounts_table, ensure_database_exists, PgAccountStore, ACCOUNTS_TABLE};

use crate::error::AppError;
use crate::model::{Account, AccountPayload};
use async_trait::async_trait;

/// Durable table of accounts keyed by an integer id assigned on insert.
///
/// Each call is one atomic statement; nothing spans calls.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new row and return it with its assigned id.
    async fn insert(&self, payload: AccountPayload) -> Result<Account, AppError>;

    async fn fetch(&self, id: i32) -> Result<Option<Account>, AppError>;

    /// Replace all mutable fields. `None` when no row has this id.
    async fn update(&self, id: i32, payload: AccountPayload) -> Result<Option<Account>, AppError>;

    /// Remove the row. Returns whether a row existed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// All rows ordered by id.
    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
