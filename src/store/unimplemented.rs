//! Placeholder for registered backends whose driver is not written yet.

use crate::config::BackendKind;
use crate::error::DbError;
use crate::store::{PaginateParameters, ResourceId, ResourceObj, StorageAdapter};
use async_trait::async_trait;

/// Adapter that fails every operation with [`DbError::NotImplemented`].
/// Construction succeeds so a registry can list every backend kind.
#[derive(Clone, Debug)]
pub struct UnimplementedAdapter {
    backend: BackendKind,
    path: String,
    table: String,
}

impl UnimplementedAdapter {
    pub fn new(backend: BackendKind, path: &str, table: &str) -> Self {
        tracing::warn!(backend = %backend, table = %table, "backend driver not implemented; operations will fail");
        UnimplementedAdapter {
            backend,
            path: path.to_string(),
            table: table.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn fail<T>(&self, operation: &'static str) -> Result<T, DbError> {
        tracing::warn!(backend = %self.backend, table = %self.table, operation, "backend not implemented");
        Err(DbError::NotImplemented {
            backend: self.backend,
            operation,
        })
    }
}

#[async_trait]
impl StorageAdapter for UnimplementedAdapter {
    fn backend(&self) -> BackendKind {
        self.backend
    }

    fn table(&self) -> &str {
        &self.table
    }

    async fn insert_one(&self, _id: ResourceId, _obj: ResourceObj) -> Result<ResourceObj, DbError> {
        self.fail("insert_one")
    }

    async fn select_one(&self, _id: ResourceId) -> Result<ResourceObj, DbError> {
        self.fail("select_one")
    }

    async fn update_one(&self, _id: ResourceId, _obj: ResourceObj, _partial: bool) -> Result<ResourceObj, DbError> {
        self.fail("update_one")
    }

    async fn delete_one(&self, _id: ResourceId) -> Result<(), DbError> {
        self.fail("delete_one")
    }

    async fn select_many(&self, _paginate: PaginateParameters) -> Result<Vec<ResourceObj>, DbError> {
        self.fail("select_many")
    }
}
