//! Record shapes: named, ordered field sets used to validate and document one kind of payload.

use crate::schema::field::{AnnotatedType, DefaultValue, FieldType};
use indexmap::IndexMap;
use utoipa::openapi::schema::{KnownFormat, ObjectBuilder, Schema, SchemaFormat, SchemaType, Type};
use utoipa::openapi::RefOr;

/// Name of the identity field carried by response shapes.
pub const ID_FIELD: &str = "id";

/// Purpose of a shape within a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Create,
    Response,
    Update,
}

impl ShapeKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ShapeKind::Create => "Create",
            ShapeKind::Response => "Response",
            ShapeKind::Update => "Update",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    fields: IndexMap<String, AnnotatedType>,
}

impl Shape {
    pub(crate) fn new(name: String, kind: ShapeKind, fields: IndexMap<String, AnnotatedType>) -> Self {
        Shape { name, kind, fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn get(&self, field: &str) -> Option<&AnnotatedType> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in declaration order (the identity field first for response shapes).
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &AnnotatedType)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Structural equality: same field names in the same order with the same annotations.
    pub fn same_structure(&self, other: &Shape) -> bool {
        self.fields == other.fields
    }

    /// OpenAPI object schema for this shape. Fields without a default are listed as required;
    /// factory defaults are not rendered since they have no literal value.
    pub fn to_openapi(&self) -> Schema {
        let mut builder = ObjectBuilder::new()
            .schema_type(SchemaType::Type(Type::Object))
            .title(Some(self.name.clone()));
        for (name, ty) in &self.fields {
            builder = builder.property(name.clone(), RefOr::T(Schema::Object(field_schema(ty))));
            if ty.is_required() {
                builder = builder.required(name.clone());
            }
        }
        Schema::Object(builder.build())
    }
}

fn field_schema(ty: &AnnotatedType) -> utoipa::openapi::schema::Object {
    let base = match ty.base {
        FieldType::Any => None,
        FieldType::String | FieldType::Uuid | FieldType::DateTime | FieldType::Date => Some(Type::String),
        FieldType::Integer => Some(Type::Integer),
        FieldType::Float => Some(Type::Number),
        FieldType::Boolean => Some(Type::Boolean),
        FieldType::List => Some(Type::Array),
        FieldType::Object => Some(Type::Object),
    };
    let schema_type = match (base, ty.nullable) {
        (None, _) => SchemaType::AnyValue,
        (Some(t), true) => SchemaType::Array(vec![t, Type::Null]),
        (Some(t), false) => SchemaType::Type(t),
    };
    let format = match ty.base {
        FieldType::Uuid => Some(SchemaFormat::KnownFormat(KnownFormat::Uuid)),
        FieldType::DateTime => Some(SchemaFormat::KnownFormat(KnownFormat::DateTime)),
        FieldType::Date => Some(SchemaFormat::KnownFormat(KnownFormat::Date)),
        FieldType::Integer => Some(SchemaFormat::KnownFormat(KnownFormat::Int64)),
        FieldType::Float => Some(SchemaFormat::KnownFormat(KnownFormat::Double)),
        _ => None,
    };
    let default = match &ty.default {
        DefaultValue::Value(v) => Some(v.clone()),
        DefaultValue::Required | DefaultValue::Factory(_) => None,
    };
    ObjectBuilder::new()
        .schema_type(schema_type)
        .format(format)
        .title(Some(ty.title.clone()))
        .description(Some(ty.description.clone()))
        .default(default)
        .build()
}
