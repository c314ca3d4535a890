//! Account service binary: reads config from env, prepares the database, serves the API.

use account_service::{
    build_app, ensure_accounts_table, ensure_database_exists, AppState, Config, PgAccountStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(account_service::config::DEFAULT_LOG_DIRECTIVE)),
        )
        .init();

    let config = Config::from_env()?;
    ensure_database_exists(&config.database_uri).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_uri)
        .await?;
    ensure_accounts_table(&pool).await?;

    let addr = config.listen_addr()?;
    if !config.force_https {
        tracing::warn!("HTTPS enforcement disabled");
    }
    let state = AppState::new(Arc::new(PgAccountStore::new(pool)), config);
    let app = build_app(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
