//! End-to-end tests for loading the survey from a real workbook.
//!
//! The sheet mirrors the partner export: a blank first row, the header on
//! row 1 starting in column B, a repeated question header and an unnamed
//! sentinel column.

#![cfg(feature = "xlsx")]

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use impulse_rs::config::SurveyConfig;
use impulse_rs::survey::{self, Sentinel, SurveyQuestion, UNNAMED_INSTITUTE};
use impulse_rs::{Error, SurveySchema, SurveyTable, YesNo};

// ============================================================================
// Helper: write the workbook
// ============================================================================

fn write_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("survey.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Survey").unwrap();

    // Row 0 and column A stay empty.
    for (col, header) in ["Name", "ELN", "ELN", "FAIR"].into_iter().enumerate() {
        sheet.write_string(1, col as u16 + 1, header).unwrap();
    }

    sheet.write_string(2, 1, "Inst A").unwrap();
    sheet.write_string(2, 2, "Yes, since 2019").unwrap();
    sheet.write_string(2, 3, "no").unwrap();
    sheet.write_string(2, 4, "yes").unwrap();

    sheet.write_string(3, 1, "Inst B").unwrap();
    sheet.write_string(3, 2, "yes").unwrap();
    sheet.write_string(3, 5, "not filled").unwrap();

    // No institute name; a numeric answer.
    sheet.write_string(4, 2, "No").unwrap();
    sheet.write_string(4, 3, "Yes").unwrap();
    sheet.write_number(4, 4, 1.0).unwrap();

    workbook.save(&path).unwrap();
    path
}

fn config() -> SurveyConfig {
    SurveyConfig {
        sheet: "Survey".into(),
        header_row: 1,
        schema: SurveySchema {
            institute_column: "Name".into(),
            questions: vec![
                SurveyQuestion::new("ELN", "ELN"),
                SurveyQuestion::new("ELN.1", "ELN (lab)"),
                SurveyQuestion::new("FAIR", "FAIR"),
            ],
            sentinel: Some(Sentinel { column: "Unnamed: 5".into(), value: "not filled".into() }),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_workbook_columns_keep_sheet_positions() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path());

    let table = SurveyTable::from_workbook(&path, "Survey", 1).unwrap();
    assert_eq!(
        table.columns(),
        &["Unnamed: 0", "Name", "ELN", "ELN.1", "FAIR", "Unnamed: 5"]
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_workbook_load_builds_matrix() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path());

    let matrix = survey::load(&path, &config()).unwrap();
    assert_eq!(matrix.institutes, vec!["Inst A", UNNAMED_INSTITUTE]);
    assert_eq!(matrix.questions, vec!["ELN", "ELN (lab)", "FAIR"]);
    assert_eq!(matrix.bits(), vec![vec![1, 0], vec![0, 1], vec![1, 0]]);
    assert_eq!(matrix.answer("FAIR", UNNAMED_INSTITUTE), Some(YesNo::No));
}

#[test]
fn test_workbook_missing_sheet() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path());

    let mut config = config();
    config.sheet = "Answers".into();
    match survey::load(&path, &config) {
        Err(Error::SheetNotFound { sheet, .. }) => assert_eq!(sheet, "Answers"),
        other => panic!("expected SheetNotFound, got {other:?}"),
    }
}

#[test]
fn test_workbook_header_row_beyond_sheet() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path());

    let mut config = config();
    config.header_row = 40;
    assert!(matches!(survey::load(&path, &config), Err(Error::Malformed { .. })));
}
