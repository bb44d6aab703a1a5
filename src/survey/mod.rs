//! # Data-Standards Survey
//!
//! Turns the partners' survey sheet into a questions × institutes yes/no
//! matrix for the heatmap.
//!
//! ```text
//!   sheet ──► SurveyTable (header at row 1, pandas-style column names)
//!         ──► drop rows flagged by the sentinel column ("not filled")
//!         ──► normalize every question cell to yes/no
//!         ──► SurveyMatrix { questions, institutes, answers[q][i] }
//! ```

pub mod table;
#[cfg(feature = "xlsx")]
mod xlsx;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SurveyConfig;
use crate::normalize::{normalize_answer, YesNo};
use crate::Result;

pub use table::SurveyTable;

/// Name shown for a row whose institute cell is empty.
///
/// Only the institute column gets this placeholder; empty answer cells
/// still normalize to "no".
pub const UNNAMED_INSTITUTE: &str = "unnamed";

// ============================================================================
// Schema
// ============================================================================

/// One yes/no question: the sheet column and its short heatmap label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub column: String,
    pub label: String,
}

impl SurveyQuestion {
    pub fn new(column: impl Into<String>, label: impl Into<String>) -> Self {
        Self { column: column.into(), label: label.into() }
    }
}

/// Rows whose `column` holds exactly `value` are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentinel {
    pub column: String,
    pub value: String,
}

/// Which columns of the sheet make up the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySchema {
    pub institute_column: String,
    pub questions: Vec<SurveyQuestion>,
    pub sentinel: Option<Sentinel>,
}

impl Default for SurveySchema {
    /// The IMPULSE "Mapping data standards" survey layout.
    fn default() -> Self {
        let questions = [
            ("Data Management Plan", "DMP"),
            ("Laboratory Information Management System (LIMS) [yes/no]", "LIMS"),
            ("Electronic Laboratory Notebook (ELN) [yes/no]", "ELN"),
            ("Lab data steward [yes/no]", "Data steward"),
            ("Are your data FAIR? [yes/no]", "FAIR"),
            ("BioAssay Ontology (BAO) [yes/no]", "BAO"),
            ("Relevant [yes/no].3", "Protein"),
            ("Relevant [yes/no].4", "Nucleic acid"),
            ("Relevant [yes/no].5", "Organism"),
            ("Relevant [yes/no].6", "Analytical data"),
            ("Relevant [yes/no].7", "Imaging data"),
            ("Relevant [yes/no].8", "OMICs data"),
            ("Scripting [yes/no]", "Scripting"),
            ("Version control system [yes/no]", "Version control"),
        ]
        .into_iter()
        .map(|(column, label)| SurveyQuestion::new(column, label))
        .collect();

        Self {
            institute_column: "Name".into(),
            questions,
            sentinel: Some(Sentinel {
                column: "Unnamed: 72".into(),
                value: "not filled".into(),
            }),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a survey export and build its matrix.
///
/// `.csv` files are parsed as a CSV export of the sheet; anything else is
/// opened as a workbook and `config.sheet` is read.
pub fn load(path: impl AsRef<Path>, config: &SurveyConfig) -> Result<SurveyMatrix> {
    let path = path.as_ref();
    info!(path = %path.display(), sheet = %config.sheet, "loading survey");
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let table = if is_csv {
        SurveyTable::from_csv_path(path, config.header_row)?
    } else {
        read_workbook(path, config)?
    };
    SurveyMatrix::build(&table, &config.schema)
}

#[cfg(feature = "xlsx")]
fn read_workbook(path: &Path, config: &SurveyConfig) -> Result<SurveyTable> {
    SurveyTable::from_workbook(path, &config.sheet, config.header_row)
}

#[cfg(not(feature = "xlsx"))]
fn read_workbook(path: &Path, _config: &SurveyConfig) -> Result<SurveyTable> {
    Err(crate::Error::Config(format!(
        "cannot read workbook {}: built without the `xlsx` feature",
        path.display()
    )))
}

// ============================================================================
// Matrix
// ============================================================================

/// Normalized answers, one row per question and one column per institute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyMatrix {
    pub questions: Vec<String>,
    pub institutes: Vec<String>,
    /// `answers[q][i]` is institute `i`'s answer to question `q`.
    pub answers: Vec<Vec<YesNo>>,
}

impl SurveyMatrix {
    /// Build the matrix from a loaded table.
    ///
    /// Fails only when a schema column is absent from the table; cell
    /// contents never fail (anything that is not a leading "yes" is "no").
    pub fn build(table: &SurveyTable, schema: &SurveySchema) -> Result<Self> {
        let institute_col = table.require_column(&schema.institute_column)?;
        let question_cols = schema
            .questions
            .iter()
            .map(|q| table.require_column(&q.column))
            .collect::<Result<Vec<_>>>()?;
        let sentinel = match &schema.sentinel {
            Some(s) => Some((table.require_column(&s.column)?, s.value.as_str())),
            None => None,
        };

        let mut matrix = Self {
            questions: schema.questions.iter().map(|q| q.label.clone()).collect(),
            institutes: Vec::new(),
            answers: vec![Vec::new(); question_cols.len()],
        };

        let mut excluded = 0usize;
        for row in table.rows() {
            if let Some((col, value)) = sentinel {
                if row[col].as_str() == Some(value) {
                    excluded += 1;
                    continue;
                }
            }
            let institute = row[institute_col]
                .to_text()
                .unwrap_or_else(|| UNNAMED_INSTITUTE.to_owned());
            debug!(institute = %institute, "survey row");
            matrix.institutes.push(institute);
            for (answers, &col) in matrix.answers.iter_mut().zip(&question_cols) {
                answers.push(normalize_answer(&row[col]));
            }
        }

        info!(
            institutes = matrix.institutes.len(),
            questions = matrix.questions.len(),
            excluded,
            "survey matrix built"
        );
        Ok(matrix)
    }

    /// (questions, institutes)
    pub fn shape(&self) -> (usize, usize) {
        (self.questions.len(), self.institutes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.institutes.is_empty()
    }

    /// 0/1 cells for heatmap rendering, same orientation as `answers`.
    pub fn bits(&self) -> Vec<Vec<u8>> {
        self.answers
            .iter()
            .map(|row| row.iter().map(|a| a.bit()).collect())
            .collect()
    }

    /// Answer of the first institute named `institute` to question `label`.
    pub fn answer(&self, label: &str, institute: &str) -> Option<YesNo> {
        let q = self.questions.iter().position(|l| l == label)?;
        let i = self.institutes.iter().position(|n| n == institute)?;
        Some(self.answers[q][i])
    }

    /// Number of institutes answering yes to `label`.
    pub fn yes_count(&self, label: &str) -> Option<usize> {
        let q = self.questions.iter().position(|l| l == label)?;
        Some(self.answers[q].iter().filter(|a| a.is_yes()).count())
    }
}
