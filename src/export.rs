//! Graph export — hand a projected graph to a renderer or a graph database.
//!
//! Two formats:
//!
//! ```text
//! ProjectedGraph → export_graph_json()   → { nodes, edges, config } for the graph widget
//! ProjectedGraph → export_cypher_dump()  → CREATE/MATCH statements
//!   → pipe into neo4j-admin import, or paste into Neo4j Browser
//! ```
//!
//! Both are deterministic: the same graph always produces the same bytes.

use std::io::Write;

use hashbrown::HashMap;
use serde::Serialize;

use crate::config::GraphLayout;
use crate::model::*;
use crate::Result;

/// Relationship type used for every edge in the Cypher dump.
pub const CYPHER_REL_TYPE: &str = "LINKS_TO";

/// JSON document consumed by the graph widget.
#[derive(Debug, Serialize)]
pub struct GraphPayload<'a> {
    pub nodes: &'a [GraphNode],
    pub edges: &'a [GraphEdge],
    pub config: &'a GraphLayout,
}

/// Write `graph` plus its layout settings as pretty-printed JSON.
pub fn export_graph_json(
    graph: &ProjectedGraph,
    layout: &GraphLayout,
    writer: &mut dyn Write,
) -> Result<()> {
    let payload = GraphPayload {
        nodes: &graph.nodes,
        edges: &graph.edges,
        config: layout,
    };
    serde_json::to_writer_pretty(&mut *writer, &payload)?;
    writeln!(writer)?;
    Ok(())
}

/// Export a graph as a Cypher DUMP script.
///
/// Nodes are labelled with the attribute they were first seen under and
/// numbered by their position; edges are matched on that number.
pub fn export_cypher_dump(graph: &ProjectedGraph, writer: &mut dyn Write) -> Result<()> {
    // Header
    writeln!(writer, "// impulse-rs Cypher DUMP")?;
    writeln!(writer, "// Nodes: {}", graph.node_count())?;
    writeln!(writer, "// Relationships: {}", graph.edge_count())?;
    writeln!(writer)?;

    let mut ids: HashMap<&str, usize> = HashMap::with_capacity(graph.node_count());
    for (id, node) in graph.nodes.iter().enumerate() {
        ids.insert(node.id.as_str(), id);
        let props = format_properties(&[
            ("name", CellValue::from(node.label.as_str())),
            ("color", CellValue::from(node.color.as_str())),
        ]);
        writeln!(
            writer,
            "CREATE (n:{} {{_id: {}, {}}});",
            node.attribute.graph_label(),
            id,
            props,
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "// Relationships")?;

    for edge in &graph.edges {
        // Edges always reference projected nodes; anything else is skipped.
        let (Some(src), Some(dst)) = (ids.get(edge.source.as_str()), ids.get(edge.target.as_str())) else {
            continue;
        };
        let props_part = match edge.style {
            EdgeStyle::Default => String::new(),
            EdgeStyle::CurveSmooth => {
                format!(" {{{}}}", format_properties(&[("style", CellValue::from("CURVE_SMOOTH"))]))
            }
        };
        writeln!(
            writer,
            "MATCH (a {{_id: {}}}), (b {{_id: {}}}) CREATE (a)-[:{}{}]->(b);",
            src, dst, CYPHER_REL_TYPE, props_part,
        )?;
    }

    Ok(())
}

/// Format properties as a Cypher property string (key: value, ...).
fn format_properties(props: &[(&str, CellValue)]) -> String {
    let mut parts = Vec::new();
    for (key, value) in props {
        // Skip internal properties
        if key.starts_with('_') {
            continue;
        }
        parts.push(format!("{}: {}", key, format_value(value)));
    }
    parts.join(", ")
}

/// Format a CellValue as a Cypher literal.
fn format_value(value: &CellValue) -> String {
    match value {
        CellValue::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) if f.is_finite() => format!("{}", f),
        CellValue::Bool(b) => b.to_string(),
        CellValue::DateTime(dt) => format!("localdatetime('{}')", dt.format("%Y-%m-%dT%H:%M:%S")),
        CellValue::Float(_) | CellValue::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&CellValue::String("hello".into())), "'hello'");
        assert_eq!(format_value(&CellValue::String("Women's".into())), "'Women\\'s'");
        assert_eq!(format_value(&CellValue::Int(42)), "42");
        assert_eq!(format_value(&CellValue::Float(2.75)), "2.75");
        assert_eq!(format_value(&CellValue::Float(f64::NAN)), "null");
        assert_eq!(format_value(&CellValue::Bool(true)), "true");
        assert_eq!(format_value(&CellValue::Null), "null");
    }

    #[test]
    fn test_format_properties() {
        let result = format_properties(&[
            ("name", CellValue::from("Ada")),
            ("_internal", CellValue::from(1)),
            ("age", CellValue::from(3)),
        ]);
        assert_eq!(result, "name: 'Ada', age: 3");
    }

    #[test]
    fn test_cypher_dump_shape() {
        let graph = ProjectedGraph {
            nodes: vec![
                GraphNode::new("A", Attribute::Site, "red"),
                GraphNode::new("HTS", Attribute::Type, "blue"),
            ],
            edges: vec![
                GraphEdge::new("A", "HTS").with_style(EdgeStyle::CurveSmooth),
                GraphEdge::new("A", "HTS"),
            ],
        };
        let mut out = Vec::new();
        export_cypher_dump(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("CREATE (n:Site {_id: 0, name: 'A', color: 'red'});"));
        assert!(text.contains("CREATE (a)-[:LINKS_TO {style: 'CURVE_SMOOTH'}]->(b);"));
        assert_eq!(text.matches("MATCH").count(), 2);
    }
}
