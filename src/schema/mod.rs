//! Field descriptors and the shapes synthesized from them.

pub mod field;
pub mod models;
pub mod shape;

pub use field::{AnnotatedType, DefaultFactory, DefaultValue, FieldDefault, FieldDescriptor, FieldType};
pub use models::{synthesize, ModelSchemas, Models};
pub use shape::{Shape, ShapeKind, ID_FIELD};
