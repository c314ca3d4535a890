//! Account service: CRUD REST API over a single PostgreSQL table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{Account, AccountPayload};
pub use routes::{account_routes, build_app, common_routes};
pub use state::AppState;
pub use store::{
    ensure_accounts_table, ensure_database_exists, AccountStore, MemoryAccountStore, PgAccountStore,
};
