use kora::{InMemorySessionStore, SessionStore};
use std::sync::Arc;

use crate::config::GatewayConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    /// Injected session backend; handlers never reach for a global store.
    pub store: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(config: GatewayConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(config: GatewayConfig) -> Self {
        Self::new(config, Arc::new(InMemorySessionStore::new()))
    }
}
