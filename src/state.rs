//! Shared application state: one service per configured resource.

use crate::config::{resolve, AppConfig};
use crate::error::ConfigError;
use crate::service::ResourceService;
use crate::store::{AdapterRegistry, Db};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    /// Resource names in config order.
    pub names: Arc<Vec<String>>,
    pub services: Arc<HashMap<String, Arc<ResourceService>>>,
}

impl AppState {
    /// Resolve shapes and bind one adapter per resource (table = resource name).
    /// Schema and backend errors surface here, at startup.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Self::with_registry(config, &AdapterRegistry::default())
    }

    pub fn with_registry(config: &AppConfig, registry: &AdapterRegistry) -> Result<Self, ConfigError> {
        let model = resolve(config)?;
        let mut names = Vec::with_capacity(model.resources.len());
        let mut services = HashMap::with_capacity(model.resources.len());
        for models in model.resources {
            let db = Db::with_registry(registry, &config.db, models.name())?;
            tracing::info!(resource = %models.name(), backend = %db.backend(), "resource registered");
            names.push(models.name().to_string());
            services.insert(models.name().to_string(), Arc::new(ResourceService::new(models, db)));
        }
        Ok(AppState {
            names: Arc::new(names),
            services: Arc::new(services),
        })
    }

    pub fn service(&self, name: &str) -> Option<&Arc<ResourceService>> {
        self.services.get(name)
    }
}
