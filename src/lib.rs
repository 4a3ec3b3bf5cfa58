//! Resource DB: backend-agnostic resource storage plus create/response/update shape synthesis.

pub mod case;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use config::{db_spec_from_env, load_from_path, resolve, AppConfig, BackendKind, DbSpecification, ResolvedModel};
pub use error::{ConfigError, DbError, SchemaError};
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{common_routes, resource_routes};
pub use schema::{synthesize, FieldDefault, FieldDescriptor, FieldType, Models, Shape, ShapeKind};
pub use service::{RecordValidator, ResourceService};
pub use state::AppState;
pub use store::{create_adapter, AdapterRegistry, Db, DefaultAdapter, PaginateParameters, ResourceId, ResourceObj, StorageAdapter};
