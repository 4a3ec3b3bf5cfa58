//! Field descriptors: one declared field of a resource with its type, optionality, default and docs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Semantic type tag of a field. Config files may use the short aliases (`str`, `int`, `dict`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Any,
    #[serde(alias = "str")]
    String,
    #[serde(alias = "int")]
    Integer,
    #[serde(alias = "number")]
    Float,
    #[serde(alias = "bool")]
    Boolean,
    Uuid,
    #[serde(alias = "date_time")]
    DateTime,
    Date,
    #[serde(alias = "array")]
    List,
    #[serde(alias = "dict")]
    Object,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Any => "any",
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Uuid => "uuid",
            FieldType::DateTime => "datetime",
            FieldType::Date => "date",
            FieldType::List => "list",
            FieldType::Object => "object",
        }
    }

    /// Whether a non-null JSON value is an instance of this type.
    /// Uuid, DateTime and Date travel as strings and must parse.
    pub fn accepts(&self, v: &Value) -> bool {
        match self {
            FieldType::Any => true,
            FieldType::String => v.is_string(),
            FieldType::Integer => v.is_i64() || v.is_u64(),
            FieldType::Float => v.is_number(),
            FieldType::Boolean => v.is_boolean(),
            FieldType::Uuid => v.as_str().map(|s| uuid::Uuid::parse_str(s).is_ok()).unwrap_or(false),
            FieldType::DateTime => v.as_str().map(parses_as_datetime).unwrap_or(false),
            FieldType::Date => v
                .as_str()
                .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok())
                .unwrap_or(false),
            FieldType::List => v.is_array(),
            FieldType::Object => v.is_object(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parses_as_datetime(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok() || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

/// Zero-argument producer of a field's default value, evaluated each time a default is needed.
#[derive(Clone)]
pub struct DefaultFactory {
    name: String,
    producer: Arc<dyn Fn() -> Value + Send + Sync>,
}

impl DefaultFactory {
    pub fn new<F>(name: impl Into<String>, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        DefaultFactory {
            name: name.into(),
            producer: Arc::new(producer),
        }
    }

    /// Factories that config files can name: `uuid4`, `now`, `today`, `empty_list`, `empty_object`.
    pub fn builtin(name: &str) -> Option<Self> {
        let factory = match name {
            "uuid4" => DefaultFactory::new(name, || Value::String(uuid::Uuid::new_v4().to_string())),
            "now" => DefaultFactory::new(name, || Value::String(Utc::now().to_rfc3339())),
            "today" => DefaultFactory::new(name, || {
                Value::String(Utc::now().date_naive().format("%Y-%m-%d").to_string())
            }),
            "empty_list" => DefaultFactory::new(name, || Value::Array(Vec::new())),
            "empty_object" => DefaultFactory::new(name, || Value::Object(serde_json::Map::new())),
            _ => return None,
        };
        Some(factory)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn produce(&self) -> Value {
        (self.producer)()
    }
}

impl fmt::Debug for DefaultFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultFactory").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Default of a field. When both are set, `factory` wins over `value`.
#[derive(Clone, Debug, Default)]
pub struct FieldDefault {
    pub factory: Option<DefaultFactory>,
    pub value: Option<Value>,
}

impl FieldDefault {
    pub fn value(value: impl Into<Value>) -> Self {
        FieldDefault {
            factory: None,
            value: Some(value.into()),
        }
    }

    pub fn factory(factory: DefaultFactory) -> Self {
        FieldDefault {
            factory: Some(factory),
            value: None,
        }
    }

    /// Effective default. A default with neither factory nor value defaults to null.
    pub fn resolve(&self) -> DefaultValue {
        match (&self.factory, &self.value) {
            (Some(f), _) => DefaultValue::Factory(f.clone()),
            (None, Some(v)) => DefaultValue::Value(v.clone()),
            (None, None) => DefaultValue::Value(Value::Null),
        }
    }
}

/// Resolved default carried by an annotated type. Factories compare by name.
#[derive(Clone, Debug)]
pub enum DefaultValue {
    /// No default: the field must be supplied.
    Required,
    Value(Value),
    Factory(DefaultFactory),
}

impl DefaultValue {
    /// Value to use when the field is missing; `None` when the field is required.
    pub fn produce(&self) -> Option<Value> {
        match self {
            DefaultValue::Required => None,
            DefaultValue::Value(v) => Some(v.clone()),
            DefaultValue::Factory(f) => Some(f.produce()),
        }
    }
}

impl PartialEq for DefaultValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DefaultValue::Required, DefaultValue::Required) => true,
            (DefaultValue::Value(a), DefaultValue::Value(b)) => a == b,
            (DefaultValue::Factory(a), DefaultValue::Factory(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Declared field of a resource.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
    /// Accepts null in addition to `field_type`.
    pub optional: bool,
    pub default: Option<FieldDefault>,
    pub description: Option<String>,
    pub title: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        FieldDescriptor {
            name: name.into(),
            field_type,
            optional: false,
            default: None,
            description: None,
            title: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Type annotation of the field: base type, nullability, default and documentation.
    pub fn annotated(&self) -> AnnotatedType {
        AnnotatedType {
            base: self.field_type,
            nullable: self.optional,
            default: self
                .default
                .as_ref()
                .map(FieldDefault::resolve)
                .unwrap_or(DefaultValue::Required),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| format!("Field {}", self.name)),
            title: self.title.clone().unwrap_or_else(|| self.name.clone()),
        }
    }
}

/// Per-field entry of a shape.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedType {
    pub base: FieldType,
    pub nullable: bool,
    pub default: DefaultValue,
    pub description: String,
    pub title: String,
}

impl AnnotatedType {
    pub fn is_required(&self) -> bool {
        matches!(self.default, DefaultValue::Required)
    }

    /// Whether `v` (possibly null) is acceptable for this field.
    pub fn accepts(&self, v: &Value) -> bool {
        if v.is_null() {
            return self.nullable;
        }
        self.base.accepts(v)
    }
}
