//! Resolved model: config validated and synthesized into shapes for runtime use.

use crate::schema::Models;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct ResolvedModel {
    /// In config order.
    pub resources: Vec<Models>,
    pub resource_by_name: HashMap<String, Models>,
}

impl ResolvedModel {
    pub fn resource(&self, name: &str) -> Option<&Models> {
        self.resource_by_name.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(Models::name)
    }
}
