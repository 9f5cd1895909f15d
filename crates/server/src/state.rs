use std::sync::Arc;
use vodhound_core::{CatalogService, Config};

/// Shared application state
pub struct AppState {
    config: Config,
    service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<CatalogService>) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &CatalogService {
        &self.service
    }
}
