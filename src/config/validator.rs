//! Config validation: resource and field names, uniqueness, known default factories.

use crate::case::is_identifier;
use crate::config::AppConfig;
use crate::error::SchemaError;
use crate::schema::{DefaultFactory, ID_FIELD};
use std::collections::HashSet;

pub fn validate(config: &AppConfig) -> Result<(), SchemaError> {
    let mut resource_names = HashSet::new();
    for resource in &config.resources {
        if resource.name.is_empty() {
            return Err(SchemaError::EmptyResourceName);
        }
        if !is_identifier(&resource.name)? {
            return Err(SchemaError::InvalidResourceName(resource.name.clone()));
        }
        if !resource_names.insert(resource.name.as_str()) {
            return Err(SchemaError::DuplicateResource(resource.name.clone()));
        }

        let mut field_names = HashSet::new();
        for field in &resource.fields {
            if !is_identifier(&field.name)? {
                return Err(SchemaError::InvalidFieldName(field.name.clone()));
            }
            if field.name == ID_FIELD {
                return Err(SchemaError::ReservedField(field.name.clone()));
            }
            if !field_names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    resource: resource.name.clone(),
                    field: field.name.clone(),
                });
            }
            let factory = field.default.as_ref().and_then(|d| d.factory.as_deref());
            if let Some(name) = factory {
                if DefaultFactory::builtin(name).is_none() {
                    return Err(SchemaError::UnknownFactory {
                        field: field.name.clone(),
                        factory: name.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
