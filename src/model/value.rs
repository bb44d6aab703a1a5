//! Cell value type shared by the catalogue and survey loaders.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Text tokens that spreadsheet and CSV exports use for "not available".
///
/// Matching is exact (case-sensitive), the same set dataframe tooling
/// treats as missing on read.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a",
    "nan", "null",
];

/// A single loaded cell.
///
/// Covers what the two input formats can produce:
/// - CSV: Null or String
/// - Spreadsheets: any variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(NaiveDateTime),
}

// ============================================================================
// Type checking
// ============================================================================

impl CellValue {
    /// Build a cell from raw text, mapping [`NA_TOKENS`] to `Null`.
    pub fn from_text(raw: &str) -> Self {
        if NA_TOKENS.contains(&raw) {
            CellValue::Null
        } else {
            CellValue::String(raw.to_owned())
        }
    }

    /// True for `Null` and for NaN floats.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Attempt to extract as &str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Display text for a present value, `None` when missing.
    pub fn to_text(&self) -> Option<String> {
        if self.is_missing() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for CellValue { fn from(v: bool) -> Self { CellValue::Bool(v) } }
impl From<i32> for CellValue { fn from(v: i32) -> Self { CellValue::Int(v as i64) } }
impl From<i64> for CellValue { fn from(v: i64) -> Self { CellValue::Int(v) } }
impl From<f64> for CellValue { fn from(v: f64) -> Self { CellValue::Float(v) } }
impl From<String> for CellValue { fn from(v: String) -> Self { CellValue::String(v) } }
impl From<&str> for CellValue { fn from(v: &str) -> Self { CellValue::String(v.to_owned()) } }
impl From<NaiveDateTime> for CellValue { fn from(v: NaiveDateTime) -> Self { CellValue::DateTime(v) } }
impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(CellValue::Null) }
}

// ============================================================================
// Display
// ============================================================================

/// Plain text rendering, used for column headers and institute names.
/// Floats with no fractional part keep a trailing `.0`.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::String(s) => f.write_str(s),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}
