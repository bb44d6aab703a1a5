//! # Answer Normalizer
//!
//! Collapses free-text survey answers ("Yes, since 2019", "Planned", ...)
//! to a strict yes/no. Detail after the leading "yes" is discarded.
//!
//! Pure functions, total over every [`CellValue`], missing cells included.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::CellValue;

/// Leading whole-word "yes", any case.
static YES_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^yes\b").expect("yes-prefix pattern is valid"));

/// Binary survey answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    /// Heatmap cell value: 1 for yes, 0 for no.
    pub fn bit(self) -> u8 {
        match self {
            YesNo::Yes => 1,
            YesNo::No => 0,
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        if b { YesNo::Yes } else { YesNo::No }
    }
}

/// Normalize one raw cell.
///
/// Only text cells can be "yes"; numbers, booleans, dates and missing
/// cells are always "no".
pub fn normalize_answer(value: &CellValue) -> YesNo {
    match value {
        CellValue::String(s) => normalize_text(s),
        _ => YesNo::No,
    }
}

/// Normalize a text answer.
pub fn normalize_text(text: &str) -> YesNo {
    YES_PREFIX.is_match(text).into()
}
