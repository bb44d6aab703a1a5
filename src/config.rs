//! Dashboard configuration.
//!
//! Every field has a default that reproduces the IMPULSE dashboard, so an
//! empty JSON object (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Attribute;
use crate::projection::{AdjacencyPattern, MissingValuePolicy};
use crate::survey::SurveySchema;
use crate::{Error, Result};

/// Default location of the screening catalogue export.
pub const DEFAULT_CATALOG_PATH: &str = "data/Cataloguing screening.csv";
/// Default location of the data-standards survey workbook.
pub const DEFAULT_SURVEY_PATH: &str = "data/Task 5.1 - Mapping data standards survey_cs.xlsx";

// ============================================================================
// Top-level configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub catalog_path: PathBuf,
    /// `None` disables the survey heatmap.
    pub survey_path: Option<PathBuf>,
    pub survey: SurveyConfig,
    pub missing_values: MissingValuePolicy,
    pub colors: AttributeColors,
    pub overview: GraphViewConfig,
    pub partner: GraphViewConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            survey_path: Some(PathBuf::from(DEFAULT_SURVEY_PATH)),
            survey: SurveyConfig::default(),
            missing_values: MissingValuePolicy::default(),
            colors: AttributeColors::default(),
            overview: GraphViewConfig::overview(),
            partner: GraphViewConfig::partner(),
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON configuration; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dashboard config");
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce any view.
    pub fn validate(&self) -> Result<()> {
        if self.overview.pattern.is_empty() {
            return Err(Error::Config("overview pattern has no steps".into()));
        }
        if self.partner.pattern.is_empty() {
            return Err(Error::Config("partner pattern has no steps".into()));
        }
        if self.survey.sheet.trim().is_empty() {
            return Err(Error::Config("survey sheet name is empty".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Survey input
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Worksheet holding the answers.
    pub sheet: String,
    /// 0-based row index of the header row.
    pub header_row: usize,
    pub schema: SurveySchema,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            sheet: "Survey".into(),
            header_row: 1,
            schema: SurveySchema::default(),
        }
    }
}

// ============================================================================
// Node colors
// ============================================================================

/// Display color per attribute column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeColors {
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "Type")]
    pub screen_type: String,
    #[serde(rename = "Cell type")]
    pub cell_type: String,
    #[serde(rename = "Assay format")]
    pub assay_format: String,
    #[serde(rename = "Model organism")]
    pub model_organism: String,
}

impl Default for AttributeColors {
    fn default() -> Self {
        Self {
            site: Attribute::Site.default_color().into(),
            screen_type: Attribute::Type.default_color().into(),
            cell_type: Attribute::CellType.default_color().into(),
            assay_format: Attribute::AssayFormat.default_color().into(),
            model_organism: Attribute::ModelOrganism.default_color().into(),
        }
    }
}

impl AttributeColors {
    pub fn color(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Site => &self.site,
            Attribute::Type => &self.screen_type,
            Attribute::CellType => &self.cell_type,
            Attribute::AssayFormat => &self.assay_format,
            Attribute::ModelOrganism => &self.model_organism,
        }
    }
}

// ============================================================================
// Graph views
// ============================================================================

/// Pattern plus renderer settings for one graph view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphViewConfig {
    pub pattern: AdjacencyPattern,
    pub layout: GraphLayout,
}

impl GraphViewConfig {
    pub fn overview() -> Self {
        Self {
            pattern: AdjacencyPattern::overview(),
            layout: GraphLayout {
                width: 1500,
                height: 900,
                hierarchical: true,
                ..GraphLayout::default()
            },
        }
    }

    pub fn partner() -> Self {
        Self {
            pattern: AdjacencyPattern::partner(),
            layout: GraphLayout {
                width: 2000,
                height: 1080,
                hierarchical: false,
                ..GraphLayout::default()
            },
        }
    }
}

/// Settings passed through to the graph widget. Keys serialize in the
/// widget's camelCase form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphLayout {
    pub width: u32,
    pub height: u32,
    pub directed: bool,
    pub node_highlight_behavior: bool,
    pub highlight_color: String,
    pub collapsible: bool,
    pub hierarchical: bool,
    pub hierarchical_sorting: bool,
    pub level_separation: u32,
    pub node_spacing: u32,
    pub tree_spacing: u32,
    /// `"UD"` is top to bottom.
    pub direction: String,
    pub sort_method: String,
    pub zoom: f64,
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 900,
            directed: true,
            node_highlight_behavior: true,
            highlight_color: "#F7A7A6".into(),
            collapsible: false,
            hierarchical: true,
            hierarchical_sorting: true,
            level_separation: 150,
            node_spacing: 100,
            tree_spacing: 200,
            direction: "UD".into(),
            sort_method: "directed".into(),
            zoom: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = DashboardConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_json_str(
            r#"{"catalog_path": "other.csv", "colors": {"Site": "orange"}, "missing_values": "unspecified"}"#,
        ).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("other.csv"));
        assert_eq!(config.colors.color(Attribute::Site), "orange");
        assert_eq!(config.colors.color(Attribute::Type), "blue");
        assert_eq!(config.missing_values, MissingValuePolicy::Unspecified);
    }

    #[test]
    fn test_layout_defaults_per_view() {
        let config = DashboardConfig::default();
        assert!(config.overview.layout.hierarchical);
        assert!(!config.partner.layout.hierarchical);
        assert_eq!(config.partner.layout.width, 2000);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut config = DashboardConfig::default();
        config.partner.pattern = AdjacencyPattern::new();
        assert!(config.validate().is_err());
    }
}
