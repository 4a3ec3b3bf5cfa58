//! Record validation against synthesized shapes.

use crate::error::DbError;
use crate::schema::Shape;
use crate::store::ResourceObj;

pub struct RecordValidator;

impl RecordValidator {
    /// Validate a full record. Missing fields take their default or fail as required; defaults
    /// are checked like supplied values. Null is accepted only for optional fields. Keys unknown
    /// to the shape are dropped and the output follows shape order.
    pub fn validate(obj: &ResourceObj, shape: &Shape) -> Result<ResourceObj, DbError> {
        let mut out = ResourceObj::with_capacity(shape.len());
        for (name, ty) in shape.fields() {
            let value = match obj.get(name) {
                Some(v) => {
                    check_field(shape, name, v)?;
                    v.clone()
                }
                None => {
                    let v = ty
                        .default
                        .produce()
                        .ok_or_else(|| DbError::Validation(format!("{} is required", name)))?;
                    // Defaults are not type-checked at synthesis time.
                    check_field(shape, name, &v)?;
                    v
                }
            };
            out.insert(name.to_string(), value);
        }
        Ok(out)
    }

    /// Validate only the fields present in `obj` (for partial updates). Required is not enforced
    /// and no defaults are applied.
    pub fn validate_partial(obj: &ResourceObj, shape: &Shape) -> Result<ResourceObj, DbError> {
        let mut out = ResourceObj::with_capacity(obj.len());
        for (name, v) in obj {
            if shape.contains(name) {
                check_field(shape, name, v)?;
                out.insert(name.clone(), v.clone());
            }
        }
        Ok(out)
    }
}

fn check_field(shape: &Shape, name: &str, v: &serde_json::Value) -> Result<(), DbError> {
    let Some(ty) = shape.get(name) else {
        return Ok(());
    };
    if v.is_null() && !ty.nullable {
        return Err(DbError::Validation(format!("{} must not be null", name)));
    }
    if !ty.accepts(v) {
        return Err(DbError::Validation(format!("{} must be of type {}", name, ty.base)));
    }
    Ok(())
}
