use serde::{Deserialize, Serialize};

use super::origin::Origin;

/// An identifier visible at some point of a Lua source, with its origin
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    pub origin: Origin,
}

impl Binding {
    pub fn new(name: impl Into<String>, origin: Origin) -> Self {
        Self {
            name: name.into(),
            origin,
        }
    }
}
