//! PostgreSQL-backed account store and startup DDL.

use super::AccountStore;
use crate::error::{AppError, ConfigError};
use crate::model::{Account, AccountPayload};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const ACCOUNTS_TABLE: &str = "accounts";

const COLUMNS: &str = "id, name, email, address, phone_number, date_joined";

/// Create the `accounts` table if it does not exist. Column widths match `RequestValidator`.
pub async fn ensure_accounts_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name VARCHAR(64) NOT NULL,
            email VARCHAR(64) NOT NULL,
            address VARCHAR(256) NOT NULL,
            phone_number VARCHAR(32),
            date_joined DATE NOT NULL DEFAULT CURRENT_DATE
        )
        "#,
        ACCOUNTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = ACCOUNTS_TABLE, "accounts table ready");
    Ok(())
}

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn insert(&self, payload: AccountPayload) -> Result<Account, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, email, address, phone_number, date_joined) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            ACCOUNTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let date_joined = payload.date_joined_or_today();
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(payload.name)
            .bind(payload.email)
            .bind(payload.address)
            .bind(payload.phone_number)
            .bind(date_joined)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch(&self, id: i32) -> Result<Option<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, payload: AccountPayload) -> Result<Option<Account>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $2, email = $3, address = $4, phone_number = $5, \
             date_joined = COALESCE($6, date_joined) WHERE id = $1 RETURNING {}",
            ACCOUNTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .bind(payload.name)
            .bind(payload.email)
            .bind(payload.address)
            .bind(payload.phone_number)
            .bind(payload.date_joined)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Account>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_opts, db_name) = admin_options(database_url)?;
    let Some(db_name) = db_name.filter(|n| !n.is_empty() && n != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin_opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database on the same server, plus the target database name.
/// Host, credentials and query options such as `sslmode` carry over unchanged.
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        var: "DATABASE_URI",
        value: format!("{} ({})", database_url, e),
    })?;
    let db_name = opts.get_database().map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
