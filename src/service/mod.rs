//! ResourceService: shape-checked CRUD on top of a storage adapter.

mod crud;
mod validation;
pub use crud::ResourceService;
pub use validation::RecordValidator;
