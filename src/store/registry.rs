//! Backend selection: a table from backend kind to adapter constructor.

use crate::config::{BackendKind, DbSpecification};
use crate::error::DbError;
use crate::store::{DefaultAdapter, StorageAdapter, UnimplementedAdapter};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds an adapter bound to `spec.path` and `table`. Must not perform I/O that can fail silently.
pub type AdapterFactory = fn(&DbSpecification, &str) -> Result<Arc<dyn StorageAdapter>, DbError>;

#[derive(Clone)]
pub struct AdapterRegistry {
    factories: HashMap<BackendKind, AdapterFactory>,
}

fn default_factory(spec: &DbSpecification, table: &str) -> Result<Arc<dyn StorageAdapter>, DbError> {
    Ok(Arc::new(DefaultAdapter::new(&spec.path, table)))
}

fn unimplemented_factory(spec: &DbSpecification, table: &str) -> Result<Arc<dyn StorageAdapter>, DbError> {
    Ok(Arc::new(UnimplementedAdapter::new(spec.backend, &spec.path, table)))
}

impl AdapterRegistry {
    /// Registry with no backends; every `create` fails with [`DbError::UnknownBackend`].
    pub fn empty() -> Self {
        AdapterRegistry {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the constructor for `kind`.
    pub fn register(&mut self, kind: BackendKind, factory: AdapterFactory) -> &mut Self {
        self.factories.insert(kind, factory);
        self
    }

    pub fn contains(&self, kind: BackendKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Registered kinds in declaration order of [`BackendKind`].
    pub fn kinds(&self) -> Vec<BackendKind> {
        BackendKind::ALL
            .into_iter()
            .filter(|k| self.factories.contains_key(k))
            .collect()
    }

    pub fn create(&self, spec: &DbSpecification, table: &str) -> Result<Arc<dyn StorageAdapter>, DbError> {
        let factory = self
            .factories
            .get(&spec.backend)
            .ok_or_else(|| DbError::UnknownBackend(spec.backend.to_string()))?;
        let adapter = factory(spec, table)?;
        tracing::debug!(backend = %spec.backend, table = %table, "adapter created");
        Ok(adapter)
    }
}

impl Default for AdapterRegistry {
    /// Every backend kind: `Default` is the in-process engine, the rest are not implemented yet.
    fn default() -> Self {
        let mut registry = AdapterRegistry::empty();
        registry
            .register(BackendKind::Default, default_factory)
            .register(BackendKind::Postgres, unimplemented_factory)
            .register(BackendKind::Redis, unimplemented_factory)
            .register(BackendKind::Sqlite, unimplemented_factory)
            .register(BackendKind::TinyDb, unimplemented_factory);
        registry
    }
}

/// Build the adapter for `spec` from the default registry.
pub fn create_adapter(spec: &DbSpecification, table: &str) -> Result<Arc<dyn StorageAdapter>, DbError> {
    AdapterRegistry::default().create(spec, table)
}
