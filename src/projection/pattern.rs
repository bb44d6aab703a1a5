//! Adjacency patterns — which attribute pairs get an edge per row.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{Attribute, EdgeStyle};

/// One `from → to` hop of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyStep {
    pub from: Attribute,
    pub to: Attribute,
    #[serde(default)]
    pub style: EdgeStyle,
}

/// Fixed, caller-specified sequence of attribute hops.
///
/// The pattern is configuration, never derived from the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyPattern {
    steps: SmallVec<[AdjacencyStep; 4]>,
}

impl AdjacencyPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hop.
    pub fn step(mut self, from: Attribute, to: Attribute, style: EdgeStyle) -> Self {
        self.steps.push(AdjacencyStep { from, to, style });
        self
    }

    /// Consecutive hops through `attributes`, all with the default style.
    pub fn chain(attributes: &[Attribute]) -> Self {
        let steps = attributes
            .windows(2)
            .map(|w| AdjacencyStep { from: w[0], to: w[1], style: EdgeStyle::Default })
            .collect();
        Self { steps }
    }

    /// Aggregate view over the whole catalogue: Site → Type → Assay format
    /// → Model organism. Cell type does not participate.
    pub fn overview() -> Self {
        Self::chain(&[
            Attribute::Site,
            Attribute::Type,
            Attribute::AssayFormat,
            Attribute::ModelOrganism,
        ])
    }

    /// Per-partner view: the full hierarchy including Cell type, with
    /// curved edges everywhere except Assay format → Cell type.
    pub fn partner() -> Self {
        Self::new()
            .step(Attribute::Site, Attribute::Type, EdgeStyle::CurveSmooth)
            .step(Attribute::Type, Attribute::AssayFormat, EdgeStyle::CurveSmooth)
            .step(Attribute::AssayFormat, Attribute::CellType, EdgeStyle::Default)
            .step(Attribute::CellType, Attribute::ModelOrganism, EdgeStyle::CurveSmooth)
    }

    pub fn steps(&self) -> &[AdjacencyStep] {
        &self.steps
    }

    /// Number of hops (edges emitted per complete row).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Attributes touched by any hop, in schema order.
    pub fn attributes(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|a| self.steps.iter().any(|s| s.from == *a || s.to == *a))
            .collect()
    }
}
