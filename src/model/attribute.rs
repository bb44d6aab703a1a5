//! Attribute — the fixed column schema of the screening catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// One categorical column of the screening catalogue.
///
/// Declaration order is schema order, which is also the node traversal
/// order of the graph projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "Site")]
    Site,
    #[serde(rename = "Type")]
    Type,
    #[serde(rename = "Cell type")]
    CellType,
    #[serde(rename = "Assay format")]
    AssayFormat,
    #[serde(rename = "Model organism")]
    ModelOrganism,
}

impl Attribute {
    /// All attributes in schema order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Site,
        Attribute::Type,
        Attribute::CellType,
        Attribute::AssayFormat,
        Attribute::ModelOrganism,
    ];

    /// Attributes offered for the per-partner breakdown, sorted by column name.
    pub const BREAKDOWN: [Attribute; 3] = [
        Attribute::AssayFormat,
        Attribute::CellType,
        Attribute::ModelOrganism,
    ];

    /// Header text in the catalogue CSV.
    pub fn column_name(self) -> &'static str {
        match self {
            Attribute::Site => "Site",
            Attribute::Type => "Type",
            Attribute::CellType => "Cell type",
            Attribute::AssayFormat => "Assay format",
            Attribute::ModelOrganism => "Model organism",
        }
    }

    /// Default node color for values first seen under this attribute.
    pub fn default_color(self) -> &'static str {
        match self {
            Attribute::Site => "red",
            Attribute::Type => "blue",
            Attribute::CellType => "green",
            Attribute::AssayFormat => "purple",
            Attribute::ModelOrganism => "cyan",
        }
    }

    /// Node label used in Cypher exports (`:Site`, `:CellType`, ...).
    pub fn graph_label(self) -> &'static str {
        match self {
            Attribute::Site => "Site",
            Attribute::Type => "Type",
            Attribute::CellType => "CellType",
            Attribute::AssayFormat => "AssayFormat",
            Attribute::ModelOrganism => "ModelOrganism",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Accepts the column header (`"Cell type"`) or a snake/kebab form
/// (`cell_type`, `cell-type`), case-insensitively.
impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c.to_ascii_lowercase() })
            .collect();
        Attribute::ALL
            .into_iter()
            .find(|a| a.column_name().to_ascii_lowercase() == key)
            .ok_or_else(|| Error::UnknownAttribute(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute() {
        assert_eq!("Cell type".parse::<Attribute>().unwrap(), Attribute::CellType);
        assert_eq!("assay_format".parse::<Attribute>().unwrap(), Attribute::AssayFormat);
        assert_eq!("model-organism".parse::<Attribute>().unwrap(), Attribute::ModelOrganism);
        assert!("Organism".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_breakdown_sorted_by_name() {
        let names: Vec<_> = Attribute::BREAKDOWN.iter().map(|a| a.column_name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_serde_uses_column_name() {
        let json = serde_json::to_string(&Attribute::ModelOrganism).unwrap();
        assert_eq!(json, "\"Model organism\"");
    }
}
