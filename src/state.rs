//! Shared application state for all routes.

use crate::config::Config;
use crate::store::AccountStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
