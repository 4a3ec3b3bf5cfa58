//! Raw config types: backend specification and declarative resource definitions.

use crate::error::{DbError, SchemaError};
use crate::schema::{DefaultFactory, FieldDefault, FieldDescriptor, FieldType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of storage backends the registry knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BackendKind {
    /// In-process reference engine.
    #[default]
    Default,
    Postgres,
    Redis,
    Sqlite,
    TinyDb,
}

impl BackendKind {
    pub const ALL: [BackendKind; 5] = [
        BackendKind::Default,
        BackendKind::Postgres,
        BackendKind::Redis,
        BackendKind::Sqlite,
        BackendKind::TinyDb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Default => "Default",
            BackendKind::Postgres => "Postgres",
            BackendKind::Redis => "Redis",
            BackendKind::Sqlite => "SQLite",
            BackendKind::TinyDb => "TinyDB",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = DbError;

    /// Case-insensitive; anything outside the closed set is [`DbError::UnknownBackend`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DbError::UnknownBackend(s.to_string()))
    }
}

impl TryFrom<String> for BackendKind {
    type Error = DbError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BackendKind> for String {
    fn from(kind: BackendKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Where and how resources are stored. Immutable once adapters are built from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbSpecification {
    /// Backend-specific location or connection string. Ignored by the default backend.
    #[serde(default)]
    pub path: String,
    #[serde(default, alias = "client", alias = "engine")]
    pub backend: BackendKind,
}

impl DbSpecification {
    pub fn new(path: impl Into<String>, backend: BackendKind) -> Self {
        DbSpecification {
            path: path.into(),
            backend,
        }
    }

    /// Build from a backend name, failing with [`DbError::UnknownBackend`] for unregistered names.
    pub fn parse(path: impl Into<String>, backend: &str) -> Result<Self, DbError> {
        Ok(Self::new(path, backend.parse()?))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// Name of a builtin factory (`uuid4`, `now`, `today`, `empty_list`, `empty_object`).
    #[serde(default)]
    pub factory: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: FieldType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub default: Option<DefaultConfig>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl FieldConfig {
    /// Descriptor for this field, resolving a named factory.
    pub fn to_descriptor(&self) -> Result<FieldDescriptor, SchemaError> {
        let default = match &self.default {
            None => None,
            Some(d) => {
                let factory = match &d.factory {
                    None => None,
                    Some(name) => Some(DefaultFactory::builtin(name).ok_or_else(|| SchemaError::UnknownFactory {
                        field: self.name.clone(),
                        factory: name.clone(),
                    })?),
                };
                Some(FieldDefault {
                    factory,
                    value: d.value.clone(),
                })
            }
        };
        Ok(FieldDescriptor {
            name: self.name.clone(),
            field_type: self.type_,
            optional: self.optional,
            default,
            description: self.description.clone(),
            title: self.title.clone(),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// Everything a process needs to serve its resources.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub db: DbSpecification,
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}
