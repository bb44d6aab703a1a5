//! SurveyTable — a raw sheet with its header row resolved to column names.

use std::io;
use std::path::Path;

use hashbrown::HashMap;

use crate::model::CellValue;
use crate::{Error, Result};

/// Named columns over rows of raw cells.
///
/// Every row has exactly `columns().len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SurveyTable {
    /// Build from a cell grid whose header sits at `header_row` (0-based).
    ///
    /// Rows above the header are ignored, as are data rows with no present
    /// cell. Short rows are padded with `Null`.
    pub fn from_grid(grid: Vec<Vec<CellValue>>, header_row: usize) -> Result<Self> {
        if header_row >= grid.len() {
            return Err(Error::Malformed {
                table: "survey".into(),
                message: format!("header row {header_row} is beyond the last row ({} rows)", grid.len()),
            });
        }
        let width = grid.iter().skip(header_row).map(Vec::len).max().unwrap_or(0);

        let mut rows = grid.into_iter().skip(header_row);
        let mut header = rows.next().unwrap_or_default();
        header.resize(width, CellValue::Null);
        let columns = header_names(&header);

        let rows = rows
            .filter(|row| row.iter().any(|c| !c.is_missing()))
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();

        Ok(Self { columns, rows })
    }

    /// Parse a CSV export of the sheet. Every line is data; the header is
    /// located by `header_row` like in [`SurveyTable::from_grid`].
    pub fn from_csv_reader<R: io::Read>(reader: R, header_row: usize) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut grid = Vec::new();
        for record in reader.records() {
            let record = record?;
            grid.push(record.iter().map(CellValue::from_text).collect());
        }
        Self::from_grid(grid, header_row)
    }

    pub fn from_csv_path(path: impl AsRef<Path>, header_row: usize) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(io::BufReader::new(file), header_row)
    }

    /// Read one worksheet of a workbook (.xlsx, .xls, .ods).
    #[cfg(feature = "xlsx")]
    pub fn from_workbook(path: impl AsRef<Path>, sheet: &str, header_row: usize) -> Result<Self> {
        let grid = super::xlsx::read_sheet(path.as_ref(), sheet)?;
        Self::from_grid(grid, header_row)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`SurveyTable::column_index`] but a missing column is an error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| Error::MissingColumn {
            table: "survey".into(),
            column: name.into(),
        })
    }
}

/// Column names for a header row.
///
/// Blank headers become `Unnamed: {index}`; repeated names get `.1`, `.2`,
/// ... suffixes, skipping any suffix that is itself already a name.
fn header_names(header: &[CellValue]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header.len());

    for (index, cell) in header.iter().enumerate() {
        let mut name = match cell {
            CellValue::String(s) if !s.is_empty() => s.clone(),
            c if c.is_missing() => format!("Unnamed: {index}"),
            CellValue::String(_) => format!("Unnamed: {index}"),
            c => c.to_string(),
        };

        let mut seen = counts.get(&name).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(name.clone(), seen + 1);
            name = format!("{name}.{seen}");
            seen = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), seen + 1);
        names.push(name);
    }
    names
}
