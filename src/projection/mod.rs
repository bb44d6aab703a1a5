//! # Graph Projector
//!
//! Turns catalogue rows into a category graph:
//!
//! ```text
//!   rows ──► nodes: one per distinct value across the pattern's columns
//!            (schema order, then row order; first column seen wins the tag)
//!        ──► edges: one per row per pattern hop, never deduplicated
//! ```
//!
//! Values are not namespaced by column: `"X"` under Cell type and `"X"`
//! under Model organism is one node.

pub mod pattern;

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AttributeColors;
use crate::model::{Attribute, GraphEdge, GraphNode, ProjectedGraph, ScreeningRecord};
use crate::Error;

pub use pattern::{AdjacencyPattern, AdjacencyStep};

/// Label of the node that stands in for missing values under
/// [`MissingValuePolicy::Unspecified`].
pub const UNSPECIFIED: &str = "unspecified";

/// What to do with a missing value inside a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePolicy {
    /// No node for the value; every edge touching it is dropped.
    #[default]
    Skip,
    /// The value becomes the [`UNSPECIFIED`] node and its edges are kept.
    Unspecified,
}

impl fmt::Display for MissingValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MissingValuePolicy::Skip => "skip",
            MissingValuePolicy::Unspecified => "unspecified",
        })
    }
}

impl FromStr for MissingValuePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(MissingValuePolicy::Skip),
            "unspecified" => Ok(MissingValuePolicy::Unspecified),
            other => Err(Error::Config(format!("unknown missing-value policy '{other}'"))),
        }
    }
}

/// Knobs shared by every projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    pub missing: MissingValuePolicy,
    pub colors: AttributeColors,
}

impl ProjectionOptions {
    pub fn with_missing(mut self, missing: MissingValuePolicy) -> Self {
        self.missing = missing;
        self
    }

    fn resolve<'r>(&self, record: &'r ScreeningRecord, attribute: Attribute) -> Option<&'r str> {
        match (record.get(attribute), self.missing) {
            (Some(v), _) => Some(v),
            (None, MissingValuePolicy::Unspecified) => Some(UNSPECIFIED),
            (None, MissingValuePolicy::Skip) => None,
        }
    }
}

/// Project `records` through `pattern`.
///
/// Deterministic: the same input always yields the same node and edge
/// order.
pub fn project<R>(records: &[R], pattern: &AdjacencyPattern, options: &ProjectionOptions) -> ProjectedGraph
where
    R: Borrow<ScreeningRecord>,
{
    let mut graph = ProjectedGraph::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for attribute in pattern.attributes() {
        for record in records {
            let record: &ScreeningRecord = record.borrow();
            let Some(value) = options.resolve(record, attribute) else {
                continue;
            };
            if seen.insert(value) {
                graph.nodes.push(GraphNode::new(value, attribute, options.colors.color(attribute)));
            }
        }
    }

    let mut dropped = 0usize;
    for record in records {
        let record: &ScreeningRecord = record.borrow();
        for step in pattern.steps() {
            match (options.resolve(record, step.from), options.resolve(record, step.to)) {
                (Some(src), Some(dst)) => {
                    graph.edges.push(GraphEdge::new(src, dst).with_style(step.style));
                }
                _ => dropped += 1,
            }
        }
    }

    debug!(
        rows = records.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        dropped_edges = dropped,
        "projected category graph"
    );
    graph
}

/// Project only the rows whose `attribute` equals `value`.
pub fn project_partition<R>(
    records: &[R],
    attribute: Attribute,
    value: &str,
    pattern: &AdjacencyPattern,
    options: &ProjectionOptions,
) -> ProjectedGraph
where
    R: Borrow<ScreeningRecord>,
{
    let partition: Vec<&ScreeningRecord> = records
        .iter()
        .map(Borrow::<ScreeningRecord>::borrow)
        .filter(|r| r.matches(attribute, value))
        .collect();
    project(&partition, pattern, options)
}
