//! Workbook reading via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::model::CellValue;
use crate::{Error, Result};

/// Read `sheet` as a cell grid anchored at A1.
///
/// calamine reports only the used range; leading empty rows and columns
/// are padded back so row/column indices match the sheet.
pub(crate) fn read_sheet(path: &Path, sheet: &str) -> Result<Vec<Vec<CellValue>>> {
    let mut workbook = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(Error::SheetNotFound {
            sheet: sheet.into(),
            path: path.display().to_string(),
        });
    }

    let range = workbook.worksheet_range(sheet)?;
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    debug!(sheet, first_row, first_col, rows = range.height(), "read worksheet");

    let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Null; first_col as usize];
        cells.extend(row.iter().map(cell_value));
        grid.push(cells);
    }
    Ok(grid)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::String(s) => CellValue::from_text(s),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
    }
}
