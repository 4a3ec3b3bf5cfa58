//! Resource handlers: create, read, replace, update, delete, list, schema.

use crate::error::DbError;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::ResourceService;
use crate::store::{PaginateParameters, ResourceId, ResourceObj};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub type ServiceState = State<Arc<ResourceService>>;

pub async fn list(
    State(service): ServiceState,
    Query(paginate): Query<PaginateParameters>,
) -> Result<impl IntoResponse, DbError> {
    let rows = service.list(paginate).await?;
    Ok(success_many(rows))
}

pub async fn create(
    State(service): ServiceState,
    Json(body): Json<ResourceObj>,
) -> Result<impl IntoResponse, DbError> {
    let row = service.create(&body).await?;
    Ok(success_one(row))
}

pub async fn read(
    State(service): ServiceState,
    Path(id): Path<ResourceId>,
) -> Result<impl IntoResponse, DbError> {
    let row = service.read(id).await?;
    Ok(success_one_ok(row))
}

pub async fn replace(
    State(service): ServiceState,
    Path(id): Path<ResourceId>,
    Json(body): Json<ResourceObj>,
) -> Result<impl IntoResponse, DbError> {
    let row = service.replace(id, &body).await?;
    Ok(success_one_ok(row))
}

pub async fn update(
    State(service): ServiceState,
    Path(id): Path<ResourceId>,
    Json(body): Json<ResourceObj>,
) -> Result<impl IntoResponse, DbError> {
    let row = service.update(id, &body).await?;
    Ok(success_one_ok(row))
}

pub async fn delete(
    State(service): ServiceState,
    Path(id): Path<ResourceId>,
) -> Result<impl IntoResponse, DbError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// OpenAPI schemas of the resource's create, response and update shapes.
pub async fn schema(State(service): ServiceState) -> impl IntoResponse {
    Json(service.models().openapi())
}
