//! Identifier handling for resource and field names: validation and PascalCase shape names.

use crate::error::SchemaError;
use regex::Regex;
use std::sync::OnceLock;

fn identifier_re() -> Result<&'static Regex, SchemaError> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$"))
        .as_ref()
        .map_err(|e| SchemaError::IdentifierPattern(e.to_string()))
}

/// True when `s` starts with an ASCII letter and continues with letters, digits or underscores.
/// Leading underscores are rejected so names never collide with internal keys.
pub fn is_identifier(s: &str) -> Result<bool, SchemaError> {
    Ok(identifier_re()?.is_match(s))
}

/// Convert a resource name to PascalCase for shape names.
/// e.g. "order_item" -> "OrderItem", "user" -> "User"
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if c == '_' || c == '-' || c == ' ' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
