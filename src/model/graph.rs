//! ProjectedGraph — node set plus edge list produced by the projector.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{GraphEdge, GraphNode, WeightedEdge};

/// Nodes in first-seen order, edges in emission order (repeats kept).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ProjectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Distinct `(source, target)` pairs with their multiplicity, in the
    /// order each pair was first emitted.
    pub fn weighted_edges(&self) -> Vec<WeightedEdge> {
        let mut slot: HashMap<(&str, &str), usize> = HashMap::new();
        let mut out: Vec<WeightedEdge> = Vec::new();
        for edge in &self.edges {
            let key = (edge.source.as_str(), edge.target.as_str());
            match slot.get(&key) {
                Some(&i) => out[i].count += 1,
                None => {
                    slot.insert(key, out.len());
                    out.push(WeightedEdge {
                        source: edge.source.clone(),
                        target: edge.target.clone(),
                        count: 1,
                    });
                }
            }
        }
        out
    }
}
