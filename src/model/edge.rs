//! Edge in the projected category graph.

use serde::{Deserialize, Serialize};

/// Rendering hint carried by an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeStyle {
    #[default]
    Default,
    CurveSmooth,
}

impl EdgeStyle {
    pub fn is_default(&self) -> bool {
        matches!(self, EdgeStyle::Default)
    }
}

/// A directed edge between two category values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default, skip_serializing_if = "EdgeStyle::is_default")]
    pub style: EdgeStyle,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            style: EdgeStyle::Default,
        }
    }

    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = style;
        self
    }
}

/// Collapsed view of repeated edges: one entry per distinct
/// `(source, target)` pair with its multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: String,
    pub target: String,
    pub count: usize,
}
