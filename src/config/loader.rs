//! Load config from a JSON file or the environment, and resolve it into shapes.

use crate::config::resolved::ResolvedModel;
use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use crate::schema::{FieldDescriptor, Models};
use std::collections::HashMap;
use std::path::Path;

/// Env var holding the backend path / connection string.
pub const DB_PATH_ENV: &str = "RESOURCE_DB_PATH";
/// Env var holding the backend name (`Default`, `Postgres`, `Redis`, `SQLite`, `TinyDB`).
pub const DB_BACKEND_ENV: &str = "RESOURCE_DB_BACKEND";

/// Build resolved model from config (validates first).
pub fn resolve(config: &AppConfig) -> Result<ResolvedModel, ConfigError> {
    validate(config)?;

    let mut resources = Vec::with_capacity(config.resources.len());
    let mut resource_by_name = HashMap::new();
    for resource in &config.resources {
        let fields = resource
            .fields
            .iter()
            .map(FieldConfig::to_descriptor)
            .collect::<Result<Vec<FieldDescriptor>, _>>()?;
        let models = Models::new(&resource.name, &fields)?;
        resource_by_name.insert(resource.name.clone(), models.clone());
        resources.push(models);
    }

    Ok(ResolvedModel {
        resources,
        resource_by_name,
    })
}

/// Read an [`AppConfig`] from a JSON file.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading config");
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}

/// Backend specification from `RESOURCE_DB_PATH` (default empty) and `RESOURCE_DB_BACKEND`
/// (default `Default`).
pub fn db_spec_from_env() -> Result<DbSpecification, ConfigError> {
    let path = std::env::var(DB_PATH_ENV).unwrap_or_default();
    let backend = match std::env::var(DB_BACKEND_ENV) {
        Ok(name) if !name.is_empty() => name.parse::<BackendKind>()?,
        _ => BackendKind::Default,
    };
    Ok(DbSpecification { path, backend })
}
