//! Account entity and its request payload.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored customer account. Also the wire shape of every response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

/// Body of `POST /accounts` and `PUT /accounts/:id`. `id` is never read from the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPayload {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

impl AccountPayload {
    /// Join date to store on insert: the supplied one, or today (UTC).
    pub fn date_joined_or_today(&self) -> NaiveDate {
        self.date_joined.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Account {
    /// Overwrite every mutable field from `payload`. A missing `date_joined` keeps the current one.
    pub fn apply(&mut self, payload: AccountPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.address = payload.address;
        self.phone_number = payload.phone_number;
        if let Some(d) = payload.date_joined {
            self.date_joined = d;
        }
    }
}
