//! Renderer-agnostic chart specifications.
//!
//! Plain serde structs; a front end maps them onto its plotting library.

use serde::{Deserialize, Serialize};

use crate::survey::SurveyMatrix;
use super::{CountTable, GroupedCounts};

// ============================================================================
// Pie
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    /// Donut hole as a fraction of the radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<String>,
}

impl PieChart {
    pub fn from_counts(title: impl Into<String>, counts: &CountTable) -> Self {
        Self {
            title: title.into(),
            labels: counts.entries.iter().map(|e| e.value.clone()).collect(),
            values: counts.entries.iter().map(|e| e.count).collect(),
            hole: None,
            hover_template: None,
        }
    }

    pub fn with_hole(mut self, hole: f64) -> Self {
        self.hole = Some(hole);
        self
    }

    pub fn with_hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }
}

// ============================================================================
// Bar
// ============================================================================

/// One colored series of bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<usize>,
    /// Value labels drawn outside the bars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
}

/// Bar chart; several series are drawn side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<BarSeries>,
    pub x_tick_angle: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl BarChart {
    /// Single series, one bar per count entry, labelled with its count.
    pub fn from_counts(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        counts: &CountTable,
    ) -> Self {
        let y: Vec<usize> = counts.entries.iter().map(|e| e.count).collect();
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: vec![BarSeries {
                name: None,
                x: counts.entries.iter().map(|e| e.value.clone()).collect(),
                text: Some(y.iter().map(usize::to_string).collect()),
                y,
            }],
            x_tick_angle: -45,
            height: None,
        }
    }

    /// One series per `by` value, bars placed at their `key` value.
    pub fn grouped(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        grouped: &GroupedCounts,
    ) -> Self {
        let mut series: Vec<BarSeries> = Vec::new();
        for row in &grouped.rows {
            let slot = match series.iter().position(|s| s.name.as_deref() == Some(row.group.as_str())) {
                Some(i) => i,
                None => {
                    series.push(BarSeries {
                        name: Some(row.group.clone()),
                        x: Vec::new(),
                        y: Vec::new(),
                        text: None,
                    });
                    series.len() - 1
                }
            };
            series[slot].x.push(row.key.clone());
            series[slot].y.push(row.count);
        }
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series,
            x_tick_angle: -45,
            height: None,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

// ============================================================================
// Heatmap
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<String>,
    pub y: Vec<String>,
    /// `z[row][col]`, rows follow `y`, columns follow `x`.
    pub z: Vec<Vec<u8>>,
    pub colorscale: Vec<(f64, String)>,
    pub tick_vals: Vec<u8>,
    pub tick_text: Vec<String>,
    pub x_tick_angle: i32,
    pub height: u32,
}

impl Heatmap {
    /// Questions on the y axis, institutes on the x axis.
    pub fn from_matrix(title: impl Into<String>, matrix: &SurveyMatrix) -> Self {
        Self {
            title: title.into(),
            x_label: "Institutes".into(),
            y_label: "Survey answers".into(),
            x: matrix.institutes.clone(),
            y: matrix.questions.clone(),
            z: matrix.bits(),
            colorscale: vec![(0.0, "blue".into()), (1.0, "cyan".into())],
            tick_vals: vec![0, 1],
            tick_text: vec!["No".into(), "Yes".into()],
            x_tick_angle: 45,
            height: 700,
        }
    }
}
