/// Shared application state
use crate::config::ServerConfig;
use crate::error::Result;
use chrono::Utc;
use std::sync::Arc;
use userhub_core::{seed, UserRegistry, UserStore};

/// State shared by the gRPC service and the health endpoint
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<UserRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<UserRegistry>) -> Self {
        Self { registry }
    }

    /// Build the registry described by `config`
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let store = if config.registry.seed_demo_users {
            UserStore::with_users(seed::demo_users(Utc::now().timestamp_millis()))?
        } else {
            UserStore::new()
        };

        Ok(Self::new(Arc::new(UserRegistry::new(store))))
    }
}
