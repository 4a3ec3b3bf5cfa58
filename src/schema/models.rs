//! Schema synthesis: one descriptor list in, Create/Response/Update shapes out.

use crate::case::{is_identifier, to_pascal_case};
use crate::error::SchemaError;
use crate::schema::field::{AnnotatedType, DefaultValue, FieldDescriptor, FieldType};
use crate::schema::shape::{Shape, ShapeKind, ID_FIELD};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::openapi::schema::Schema;

/// The three shapes of one resource.
#[derive(Clone, Debug)]
pub struct Models {
    name: String,
    create: Shape,
    response: Shape,
    update: Shape,
}

/// OpenAPI schemas of one resource, keyed by shape purpose.
#[derive(Serialize)]
pub struct ModelSchemas {
    pub create: Schema,
    pub response: Schema,
    pub update: Schema,
}

impl Models {
    /// Synthesize the shapes of resource `name`. Fails on an empty name, a malformed or reserved
    /// field name, or a duplicate field.
    pub fn new(name: &str, fields: &[FieldDescriptor]) -> Result<Self, SchemaError> {
        if name.is_empty() {
            return Err(SchemaError::EmptyResourceName);
        }
        if !is_identifier(name)? {
            return Err(SchemaError::InvalidResourceName(name.to_string()));
        }

        let mut annotated: IndexMap<String, AnnotatedType> = IndexMap::with_capacity(fields.len());
        for field in fields {
            if !is_identifier(&field.name)? {
                return Err(SchemaError::InvalidFieldName(field.name.clone()));
            }
            if field.name == ID_FIELD {
                return Err(SchemaError::ReservedField(field.name.clone()));
            }
            if annotated.contains_key(&field.name) {
                return Err(SchemaError::DuplicateField {
                    resource: name.to_string(),
                    field: field.name.clone(),
                });
            }
            annotated.insert(field.name.clone(), field.annotated());
        }

        let pascal = to_pascal_case(name);
        let shape_name = |kind: ShapeKind| format!("{}{}", kind.prefix(), pascal);

        let mut response_fields = IndexMap::with_capacity(annotated.len() + 1);
        response_fields.insert(ID_FIELD.to_string(), identity_field());
        response_fields.extend(annotated.iter().map(|(k, v)| (k.clone(), v.clone())));

        tracing::debug!(resource = %name, fields = annotated.len(), "synthesized shapes");
        Ok(Models {
            name: name.to_string(),
            create: Shape::new(shape_name(ShapeKind::Create), ShapeKind::Create, annotated.clone()),
            response: Shape::new(shape_name(ShapeKind::Response), ShapeKind::Response, response_fields),
            update: Shape::new(shape_name(ShapeKind::Update), ShapeKind::Update, annotated),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create(&self) -> &Shape {
        &self.create
    }

    pub fn response(&self) -> &Shape {
        &self.response
    }

    pub fn update(&self) -> &Shape {
        &self.update
    }

    pub fn shape(&self, kind: ShapeKind) -> &Shape {
        match kind {
            ShapeKind::Create => &self.create,
            ShapeKind::Response => &self.response,
            ShapeKind::Update => &self.update,
        }
    }

    pub fn openapi(&self) -> ModelSchemas {
        ModelSchemas {
            create: self.create.to_openapi(),
            response: self.response.to_openapi(),
            update: self.update.to_openapi(),
        }
    }
}

fn identity_field() -> AnnotatedType {
    AnnotatedType {
        base: FieldType::Uuid,
        nullable: false,
        default: DefaultValue::Required,
        description: "Resource identifier".to_string(),
        title: "Id".to_string(),
    }
}

/// Free-function form of [`Models::new`].
pub fn synthesize(name: &str, fields: &[FieldDescriptor]) -> Result<Models, SchemaError> {
    Models::new(name, fields)
}
