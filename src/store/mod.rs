//! Storage adapter contract and the backends that implement it.
//!
//! Every backend implements [`StorageAdapter`]; [`AdapterRegistry`] picks one from a
//! [`DbSpecification`](crate::config::DbSpecification). Only the in-process
//! [`DefaultAdapter`] is fully implemented; other registered backends fail with
//! [`DbError::NotImplemented`].

mod db;
mod memory;
mod registry;
mod unimplemented;

pub use db::Db;
pub use memory::DefaultAdapter;
pub use registry::{create_adapter, AdapterFactory, AdapterRegistry};
pub use unimplemented::UnimplementedAdapter;

use crate::config::BackendKind;
use crate::error::DbError;
use crate::schema::ID_FIELD;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unique identifier of a resource. Generated by callers, never by storage.
pub type ResourceId = uuid::Uuid;

/// Open field map of a resource. Shapes are enforced above the storage layer.
pub type ResourceObj = serde_json::Map<String, Value>;

const DEFAULT_LIMIT: usize = 100;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Window over the ordered result set of `select_many`: items `[skip, skip + limit)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateParameters {
    /// Number of items to skip.
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of items to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl PaginateParameters {
    pub fn new(skip: usize, limit: usize) -> Self {
        PaginateParameters { skip, limit }
    }

    /// Apply the window to an ordered sequence.
    pub fn window<I: IntoIterator>(&self, items: I) -> impl Iterator<Item = I::Item> {
        items.into_iter().skip(self.skip).take(self.limit)
    }
}

impl Default for PaginateParameters {
    fn default() -> Self {
        PaginateParameters {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// CRUD capability set every backend provides. Calls may suspend on I/O; callers must not
/// assume immediate completion.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    fn backend(&self) -> BackendKind;

    fn table(&self) -> &str;

    /// Store `obj` under `id`. Fails with [`DbError::Conflict`] if `id` already exists.
    /// Returns `{id, ...obj}`.
    async fn insert_one(&self, id: ResourceId, obj: ResourceObj) -> Result<ResourceObj, DbError>;

    /// Fails with [`DbError::NotFound`] if `id` is absent. Returns `{id, ...stored}`.
    async fn select_one(&self, id: ResourceId) -> Result<ResourceObj, DbError>;

    /// Merge `obj` into the stored object when `partial`, otherwise replace it entirely.
    /// Fails with [`DbError::NotFound`] if `id` is absent. Returns `{id, ...result}`.
    async fn update_one(&self, id: ResourceId, obj: ResourceObj, partial: bool) -> Result<ResourceObj, DbError>;

    /// Fails with [`DbError::NotFound`] if `id` is absent.
    async fn delete_one(&self, id: ResourceId) -> Result<(), DbError>;

    /// Stored objects in adapter order, windowed by `paginate`.
    async fn select_many(&self, paginate: PaginateParameters) -> Result<Vec<ResourceObj>, DbError>;
}

/// `{id, ...obj}`. The identity always comes first and an `id` key inside `obj` never overrides it.
pub fn with_id(id: ResourceId, obj: &ResourceObj) -> ResourceObj {
    let mut out = ResourceObj::with_capacity(obj.len() + 1);
    out.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    for (k, v) in obj {
        if k != ID_FIELD {
            out.insert(k.clone(), v.clone());
        }
    }
    out
}

/// Copy of `obj` without the identity key, as stored by backends.
pub fn without_id(obj: ResourceObj) -> ResourceObj {
    obj.into_iter().filter(|(k, _)| k != ID_FIELD).collect()
}
