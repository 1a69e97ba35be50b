use std::sync::Arc;

use crate::config::Config;
use crate::content::store::{ContentStore, InMemoryContentStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable content store. Default: InMemoryContentStore.
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            store: Arc::new(InMemoryContentStore::new()),
        }
    }
}
