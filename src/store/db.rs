//! Table-bound handle over whichever adapter a [`DbSpecification`] selects.

use crate::config::{BackendKind, DbSpecification};
use crate::error::DbError;
use crate::store::{AdapterRegistry, PaginateParameters, ResourceId, ResourceObj, StorageAdapter};
use std::sync::Arc;

/// Uniform CRUD entry point for one table. Delegates to the adapter and logs each call.
#[derive(Clone)]
pub struct Db {
    adapter: Arc<dyn StorageAdapter>,
}

impl Db {
    pub fn new(spec: &DbSpecification, table: &str) -> Result<Self, DbError> {
        Self::with_registry(&AdapterRegistry::default(), spec, table)
    }

    pub fn with_registry(registry: &AdapterRegistry, spec: &DbSpecification, table: &str) -> Result<Self, DbError> {
        Ok(Db {
            adapter: registry.create(spec, table)?,
        })
    }

    pub fn with_adapter(adapter: Arc<dyn StorageAdapter>) -> Self {
        Db { adapter }
    }

    pub fn backend(&self) -> BackendKind {
        self.adapter.backend()
    }

    pub fn table(&self) -> &str {
        self.adapter.table()
    }

    pub fn adapter(&self) -> &Arc<dyn StorageAdapter> {
        &self.adapter
    }

    pub async fn insert_one(&self, id: ResourceId, obj: ResourceObj) -> Result<ResourceObj, DbError> {
        tracing::debug!(table = %self.table(), id = %id, "insert_one");
        self.adapter.insert_one(id, obj).await.inspect_err(|e| self.log_failure("insert_one", e))
    }

    pub async fn select_one(&self, id: ResourceId) -> Result<ResourceObj, DbError> {
        tracing::debug!(table = %self.table(), id = %id, "select_one");
        self.adapter.select_one(id).await.inspect_err(|e| self.log_failure("select_one", e))
    }

    pub async fn update_one(&self, id: ResourceId, obj: ResourceObj, partial: bool) -> Result<ResourceObj, DbError> {
        tracing::debug!(table = %self.table(), id = %id, partial, "update_one");
        self.adapter
            .update_one(id, obj, partial)
            .await
            .inspect_err(|e| self.log_failure("update_one", e))
    }

    /// Full replacement; fields missing from `obj` are discarded.
    pub async fn replace_one(&self, id: ResourceId, obj: ResourceObj) -> Result<ResourceObj, DbError> {
        self.update_one(id, obj, false).await
    }

    pub async fn delete_one(&self, id: ResourceId) -> Result<(), DbError> {
        tracing::debug!(table = %self.table(), id = %id, "delete_one");
        self.adapter.delete_one(id).await.inspect_err(|e| self.log_failure("delete_one", e))
    }

    pub async fn select_many(&self, paginate: PaginateParameters) -> Result<Vec<ResourceObj>, DbError> {
        tracing::debug!(table = %self.table(), skip = paginate.skip, limit = paginate.limit, "select_many");
        self.adapter
            .select_many(paginate)
            .await
            .inspect_err(|e| self.log_failure("select_many", e))
    }

    fn log_failure(&self, operation: &str, e: &DbError) {
        tracing::debug!(table = %self.table(), operation, error = %e, "storage operation failed");
    }
}
