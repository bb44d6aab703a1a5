//! One row of the screening catalogue.

use serde::{Deserialize, Serialize};

use super::Attribute;

/// A catalogue row with one optional value per [`Attribute`].
///
/// Fields are addressed by attribute, never by column position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreeningRecord {
    #[serde(rename = "Site")]
    pub site: Option<String>,
    #[serde(rename = "Type")]
    pub screen_type: Option<String>,
    #[serde(rename = "Cell type")]
    pub cell_type: Option<String>,
    #[serde(rename = "Assay format")]
    pub assay_format: Option<String>,
    #[serde(rename = "Model organism")]
    pub model_organism: Option<String>,
}

impl ScreeningRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter. A `None` value clears the field.
    pub fn with(mut self, attribute: Attribute, value: impl Into<Option<String>>) -> Self {
        *self.slot_mut(attribute) = value.into();
        self
    }

    /// Shorthand for `with(attribute, Some(value))`.
    pub fn set(self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.with(attribute, Some(value.into()))
    }

    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Site => self.site.as_deref(),
            Attribute::Type => self.screen_type.as_deref(),
            Attribute::CellType => self.cell_type.as_deref(),
            Attribute::AssayFormat => self.assay_format.as_deref(),
            Attribute::ModelOrganism => self.model_organism.as_deref(),
        }
    }

    /// True when `attribute` holds exactly `value`.
    pub fn matches(&self, attribute: Attribute, value: &str) -> bool {
        self.get(attribute) == Some(value)
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut Option<String> {
        match attribute {
            Attribute::Site => &mut self.site,
            Attribute::Type => &mut self.screen_type,
            Attribute::CellType => &mut self.cell_type,
            Attribute::AssayFormat => &mut self.assay_format,
            Attribute::ModelOrganism => &mut self.model_organism,
        }
    }
}

/// Row projection shown next to the partner pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningDetail {
    #[serde(rename = "Type")]
    pub screen_type: Option<String>,
    #[serde(rename = "Model organism")]
    pub model_organism: Option<String>,
    #[serde(rename = "Cell type")]
    pub cell_type: Option<String>,
    #[serde(rename = "Assay format")]
    pub assay_format: Option<String>,
}

impl From<&ScreeningRecord> for ScreeningDetail {
    fn from(r: &ScreeningRecord) -> Self {
        Self {
            screen_type: r.screen_type.clone(),
            model_organism: r.model_organism.clone(),
            cell_type: r.cell_type.clone(),
            assay_format: r.assay_format.clone(),
        }
    }
}
