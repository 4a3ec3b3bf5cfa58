//! Typed errors and HTTP mapping.

use crate::config::BackendKind;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Resource definition errors. Raised while building shapes, never per request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("resource name must not be empty")]
    EmptyResourceName,
    #[error("invalid resource name: '{0}'")]
    InvalidResourceName(String),
    #[error("invalid field name: '{0}'")]
    InvalidFieldName(String),
    #[error("field '{0}' is reserved for the resource identifier")]
    ReservedField(String),
    #[error("duplicate field '{field}' in resource '{resource}'")]
    DuplicateField { resource: String, field: String },
    #[error("duplicate resource: {0}")]
    DuplicateResource(String),
    #[error("unknown default factory '{factory}' for field '{field}'")]
    UnknownFactory { field: String, factory: String },
    #[error("identifier pattern: {0}")]
    IdentifierPattern(String),
}

/// Storage errors. Raised per operation and propagated unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("not found: {0}")]
    NotFound(Uuid),
    #[error("already exists: {0}")]
    Conflict(Uuid),
    #[error("unknown backend: {0}")]
    UnknownBackend(String),
    #[error("{backend} backend does not implement {operation}")]
    NotImplemented {
        backend: BackendKind,
        operation: &'static str,
    },
    #[error("validation: {0}")]
    Validation(String),
}

/// Startup errors while loading configuration and building resources.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config load: {0}")]
    Load(String),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Db(#[from] DbError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DbError {
    /// Status and machine-readable code the HTTP layer reports for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            DbError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            DbError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            DbError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            DbError::NotImplemented { .. } => (StatusCode::NOT_IMPLEMENTED, "not_implemented"),
            DbError::UnknownBackend(_) => (StatusCode::INTERNAL_SERVER_ERROR, "unknown_backend"),
        }
    }
}

impl IntoResponse for DbError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
