//! # Dashboard Data Model
//!
//! Plain DTOs shared by the loaders, the projector and the views.
//! These types cross every boundary: loader ↔ projector ↔ views ↔ export.
//!
//! Design rule: this module is pure data with no I/O.

pub mod value;
pub mod attribute;
pub mod record;
pub mod node;
pub mod edge;
pub mod graph;

pub use value::{CellValue, NA_TOKENS};
pub use attribute::Attribute;
pub use record::{ScreeningRecord, ScreeningDetail};
pub use node::GraphNode;
pub use edge::{GraphEdge, EdgeStyle, WeightedEdge};
pub use graph::ProjectedGraph;
