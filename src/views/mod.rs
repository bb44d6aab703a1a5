//! # Aggregation Views
//!
//! Descriptive counts over catalogue rows and the dashboard views built
//! from them. Every function takes its selection (site, attribute) as an
//! argument and recomputes from the rows it is given.

pub mod chart;

use std::borrow::Borrow;
use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Attribute, ScreeningDetail, ScreeningRecord};
use crate::survey::SurveyMatrix;

pub use chart::{BarChart, BarSeries, Heatmap, PieChart};

/// Title of the survey heatmap.
pub const HEATMAP_TITLE: &str =
    "Heat map of IMPULSE survey based on availability of data and resources";

// ============================================================================
// Count tables
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub value: String,
    pub count: usize,
}

/// Occurrences of each value of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTable {
    pub attribute: Attribute,
    pub entries: Vec<CountEntry>,
}

impl CountTable {
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn get(&self, value: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.value == value).map(|e| e.count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count each value of `attribute`.
///
/// Missing values are not counted. Entries are ordered by count, highest
/// first; equal counts keep first-appearance order.
pub fn value_counts<R: Borrow<ScreeningRecord>>(records: &[R], attribute: Attribute) -> CountTable {
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CountEntry> = Vec::new();
    for record in records {
        let record: &ScreeningRecord = record.borrow();
        let Some(value) = record.get(attribute) else { continue };
        match slot.get(value) {
            Some(&i) => entries[i].count += 1,
            None => {
                slot.insert(value, entries.len());
                entries.push(CountEntry { value: value.to_owned(), count: 1 });
            }
        }
    }
    // Stable sort keeps first-appearance order among ties.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    CountTable { attribute, entries }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: String,
    pub group: String,
    pub count: usize,
}

/// Occurrences of each (`key`, `by`) value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCounts {
    pub key: Attribute,
    pub by: Attribute,
    pub rows: Vec<GroupCount>,
}

impl GroupedCounts {
    pub fn get(&self, key: &str, group: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|r| r.key == key && r.group == group)
            .map(|r| r.count)
    }
}

/// Count rows per (`key`, `by`) pair, sorted by key then group. Rows
/// missing either value are not counted.
pub fn group_counts<R: Borrow<ScreeningRecord>>(records: &[R], key: Attribute, by: Attribute) -> GroupedCounts {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in records {
        let record: &ScreeningRecord = record.borrow();
        if let (Some(k), Some(g)) = (record.get(key), record.get(by)) {
            *counts.entry((k, g)).or_default() += 1;
        }
    }
    GroupedCounts {
        key,
        by,
        rows: counts
            .into_iter()
            .map(|((k, g), count)| GroupCount { key: k.to_owned(), group: g.to_owned(), count })
            .collect(),
    }
}

// ============================================================================
// Dashboard views
// ============================================================================

/// Screening types of one partner plus its detail rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerOverview {
    pub site: String,
    pub type_counts: CountTable,
    pub type_chart: PieChart,
    pub details: Vec<ScreeningDetail>,
}

/// Build the overview from rows already restricted to `site`.
pub fn partner_overview<R: Borrow<ScreeningRecord>>(records: &[R], site: &str) -> PartnerOverview {
    let type_counts = value_counts(records, Attribute::Type);
    let type_chart = PieChart::from_counts(format!("Types of screening for {site}"), &type_counts)
        .with_hover_template("<b>%{label}</b><br>Number of screens: %{value}<extra></extra>");
    PartnerOverview {
        site: site.to_owned(),
        details: records
            .iter()
            .map(|r| ScreeningDetail::from(Borrow::<ScreeningRecord>::borrow(r)))
            .collect(),
        type_counts,
        type_chart,
    }
}

/// Distribution of one attribute within a partner's screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeBreakdown {
    pub site: String,
    pub attribute: Attribute,
    pub counts: CountTable,
    pub counts_chart: BarChart,
    pub per_type: GroupedCounts,
    pub per_type_chart: BarChart,
    pub distribution_chart: PieChart,
}

/// Build the breakdown from rows already restricted to `site`.
pub fn attribute_breakdown<R: Borrow<ScreeningRecord>>(
    records: &[R],
    site: &str,
    attribute: Attribute,
) -> AttributeBreakdown {
    let name = attribute.column_name();
    let lower = name.to_lowercase();

    let counts = value_counts(records, attribute);
    let counts_chart = BarChart::from_counts(
        format!("Number of {lower}s per screening"),
        name,
        format!("Number of {lower}s"),
        &counts,
    )
    .with_height(600);

    let per_type = group_counts(records, Attribute::Type, attribute);
    let per_type_chart = BarChart::grouped(
        format!("{name} Distribution per Type"),
        "Type",
        format!("Number of {name}s"),
        &per_type,
    );

    let distribution_chart =
        PieChart::from_counts(format!("Overall {name} Distribution"), &counts).with_hole(0.3);

    AttributeBreakdown {
        site: site.to_owned(),
        attribute,
        counts,
        counts_chart,
        per_type,
        per_type_chart,
        distribution_chart,
    }
}

/// Yes/no heatmap of the survey matrix.
pub fn survey_heatmap(matrix: &SurveyMatrix) -> Heatmap {
    Heatmap::from_matrix(HEATMAP_TITLE, matrix)
}
