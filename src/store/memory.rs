//! Reference engine: in-process store owned by one adapter instance.

use crate::config::BackendKind;
use crate::error::DbError;
use crate::store::{with_id, without_id, PaginateParameters, ResourceId, ResourceObj, StorageAdapter};
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;

/// In-memory adapter keeping entries in insertion order. Each operation holds the lock across
/// lookup and mutation, so concurrent inserts of one id cannot both succeed.
pub struct DefaultAdapter {
    table: String,
    rows: Mutex<IndexMap<ResourceId, ResourceObj>>,
}

impl DefaultAdapter {
    /// `path` is accepted for signature parity with other backends and ignored.
    pub fn new(_path: &str, table: &str) -> Self {
        DefaultAdapter {
            table: table.to_string(),
            rows: Mutex::new(IndexMap::new()),
        }
    }

    fn lookup(rows: &IndexMap<ResourceId, ResourceObj>, id: ResourceId) -> Result<&ResourceObj, DbError> {
        rows.get(&id).ok_or(DbError::NotFound(id))
    }
}

#[async_trait]
impl StorageAdapter for DefaultAdapter {
    fn backend(&self) -> BackendKind {
        BackendKind::Default
    }

    fn table(&self) -> &str {
        &self.table
    }

    async fn insert_one(&self, id: ResourceId, obj: ResourceObj) -> Result<ResourceObj, DbError> {
        let mut rows = self.rows.lock().await;
        if Self::lookup(&rows, id).is_ok() {
            return Err(DbError::Conflict(id));
        }
        let obj = without_id(obj);
        let out = with_id(id, &obj);
        rows.insert(id, obj);
        Ok(out)
    }

    async fn select_one(&self, id: ResourceId) -> Result<ResourceObj, DbError> {
        let rows = self.rows.lock().await;
        let obj = Self::lookup(&rows, id)?;
        Ok(with_id(id, obj))
    }

    async fn update_one(&self, id: ResourceId, obj: ResourceObj, partial: bool) -> Result<ResourceObj, DbError> {
        let mut rows = self.rows.lock().await;
        let current = Self::lookup(&rows, id)?;
        let next = if partial {
            let mut merged = current.clone();
            for (k, v) in without_id(obj) {
                merged.insert(k, v);
            }
            merged
        } else {
            without_id(obj)
        };
        let out = with_id(id, &next);
        // Existing key: IndexMap keeps the entry's position.
        rows.insert(id, next);
        Ok(out)
    }

    async fn delete_one(&self, id: ResourceId) -> Result<(), DbError> {
        let mut rows = self.rows.lock().await;
        Self::lookup(&rows, id)?;
        rows.shift_remove(&id);
        Ok(())
    }

    async fn select_many(&self, paginate: PaginateParameters) -> Result<Vec<ResourceObj>, DbError> {
        let rows = self.rows.lock().await;
        Ok(paginate
            .window(rows.iter())
            .map(|(id, obj)| with_id(*id, obj))
            .collect())
    }
}
