//! Shape-checked CRUD for one resource over its storage adapter.

use crate::error::DbError;
use crate::schema::Models;
use crate::service::RecordValidator;
use crate::store::{Db, PaginateParameters, ResourceId, ResourceObj};

pub struct ResourceService {
    models: Models,
    db: Db,
}

impl ResourceService {
    pub fn new(models: Models, db: Db) -> Self {
        ResourceService { models, db }
    }

    pub fn name(&self) -> &str {
        self.models.name()
    }

    pub fn models(&self) -> &Models {
        &self.models
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Validate `body` against the create shape and store it under a fresh v4 id.
    pub async fn create(&self, body: &ResourceObj) -> Result<ResourceObj, DbError> {
        self.create_with_id(ResourceId::new_v4(), body).await
    }

    /// Like [`create`](Self::create) with a caller-chosen id; fails with Conflict if it exists.
    pub async fn create_with_id(&self, id: ResourceId, body: &ResourceObj) -> Result<ResourceObj, DbError> {
        let obj = RecordValidator::validate(body, self.models.create())?;
        let row = self.db.insert_one(id, obj).await?;
        RecordValidator::validate(&row, self.models.response())
    }

    pub async fn read(&self, id: ResourceId) -> Result<ResourceObj, DbError> {
        let row = self.db.select_one(id).await?;
        RecordValidator::validate(&row, self.models.response())
    }

    /// Replace the whole record; omitted fields take their defaults.
    pub async fn replace(&self, id: ResourceId, body: &ResourceObj) -> Result<ResourceObj, DbError> {
        let obj = RecordValidator::validate(body, self.models.update())?;
        let row = self.db.update_one(id, obj, false).await?;
        RecordValidator::validate(&row, self.models.response())
    }

    /// Merge the supplied fields into the stored record.
    pub async fn update(&self, id: ResourceId, body: &ResourceObj) -> Result<ResourceObj, DbError> {
        let obj = RecordValidator::validate_partial(body, self.models.update())?;
        let row = self.db.update_one(id, obj, true).await?;
        RecordValidator::validate(&row, self.models.response())
    }

    pub async fn delete(&self, id: ResourceId) -> Result<(), DbError> {
        self.db.delete_one(id).await
    }

    pub async fn list(&self, paginate: PaginateParameters) -> Result<Vec<ResourceObj>, DbError> {
        let rows = self.db.select_many(paginate).await?;
        rows.iter()
            .map(|row| RecordValidator::validate(row, self.models.response()))
            .collect()
    }
}
