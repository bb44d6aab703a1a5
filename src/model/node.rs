//! Node in the projected category graph.

use serde::{Deserialize, Serialize};

use super::Attribute;

/// One distinct category value.
///
/// `attribute` is the column the value was first observed under during
/// projection; `color` is that column's display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub attribute: Attribute,
    pub color: String,
}

impl GraphNode {
    pub fn new(value: impl Into<String>, attribute: Attribute, color: impl Into<String>) -> Self {
        let id = value.into();
        Self {
            label: id.clone(),
            id,
            attribute,
            color: color.into(),
        }
    }
}
