//! In-process account store for tests and local runs without PostgreSQL.

use super::AccountStore;
use crate::error::AppError;
use crate::model::{Account, AccountPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Account>,
}

/// Ids start at 1 and are never reused, like a `SERIAL` column.
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AppError {
        AppError::Db(sqlx::Error::Protocol("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, payload: AccountPayload) -> Result<Account, AppError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        inner.next_id += 1;
        let id = inner.next_id;
        let date_joined = payload.date_joined_or_today();
        let account = Account {
            id,
            name: payload.name,
            email: payload.email,
            address: payload.address,
            phone_number: payload.phone_number,
            date_joined,
        };
        inner.rows.insert(id, account.clone());
        Ok(account)
    }

    async fn fetch(&self, id: i32) -> Result<Option<Account>, AppError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, payload: AccountPayload) -> Result<Option<Account>, AppError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        Ok(inner.rows.get_mut(&id).map(|row| {
            row.apply(payload);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
