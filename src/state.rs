//! Shared application state for all routes.

use crate::config::ApiConfig;
use crate::store::BookmarkStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookmarkStore>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(store: impl BookmarkStore + 'static, config: ApiConfig) -> Self {
        AppState {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
