//! # Screening Catalogue
//!
//! Loads the partner screening catalogue (CSV) into [`ScreeningRecord`]s.
//!
//! ## Load rules
//!
//! - The header must name every [`Attribute`] column; order is free and
//!   extra columns are ignored.
//! - "Not available" tokens (see [`crate::model::NA_TOKENS`]) load as
//!   missing values.
//! - Rows without a `Type` are dropped.
//!
//! The loaded catalogue is read-only; every view filters it afresh.

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::model::{Attribute, CellValue, ScreeningRecord};
use crate::{Error, Result};

/// Table name used in load errors.
const TABLE: &str = "catalogue";

/// The loaded screening catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ScreeningRecord>,
    dropped: usize,
}

impl Catalog {
    /// Load from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading screening catalogue");
        let reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        Self::from_csv(reader)
    }

    /// Load from any CSV byte stream.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::from_csv(reader)
    }

    /// Build from already-parsed rows, applying the same `Type` rule as
    /// the CSV loader.
    pub fn from_records(records: impl IntoIterator<Item = ScreeningRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            catalog.push(record);
        }
        catalog
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?.clone();
        let mut columns = [0usize; Attribute::ALL.len()];
        for (slot, attribute) in Attribute::ALL.into_iter().enumerate() {
            columns[slot] = headers
                .iter()
                .position(|h| h == attribute.column_name())
                .ok_or_else(|| Error::MissingColumn {
                    table: TABLE.into(),
                    column: attribute.column_name().into(),
                })?;
        }

        let mut catalog = Self::default();
        for row in reader.records() {
            let row = row?;
            let record = Attribute::ALL
                .into_iter()
                .zip(columns)
                .fold(ScreeningRecord::new(), |record, (attribute, column)| {
                    let cell = CellValue::from_text(row.get(column).unwrap_or_default());
                    record.with(attribute, cell.to_text())
                });
            catalog.push(record);
        }

        info!(
            rows = catalog.records.len(),
            dropped = catalog.dropped,
            "screening catalogue loaded"
        );
        Ok(catalog)
    }

    fn push(&mut self, record: ScreeningRecord) {
        if record.get(Attribute::Type).is_some() {
            self.records.push(record);
        } else {
            debug!(site = ?record.site, "dropping catalogue row without Type");
            self.dropped += 1;
        }
    }

    pub fn records(&self) -> &[ScreeningRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows rejected at load time for a missing `Type`.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Sorted distinct non-missing values of `attribute`.
    pub fn distinct(&self, attribute: Attribute) -> Vec<&str> {
        let mut values: Vec<&str> = self.records.iter().filter_map(|r| r.get(attribute)).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Partner institutes offered for selection.
    pub fn sites(&self) -> Vec<&str> {
        self.distinct(Attribute::Site)
    }

    /// Rows whose `attribute` equals `value`, in load order.
    pub fn filter(&self, attribute: Attribute, value: &str) -> Vec<&ScreeningRecord> {
        self.records.iter().filter(|r| r.matches(attribute, value)).collect()
    }

    pub fn for_site(&self, site: &str) -> Vec<&ScreeningRecord> {
        self.filter(Attribute::Site, site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Site,Type,Cell type,Assay format,Model organism,Contact
Oslo,HTS,HeLa,Biochem,Human,a@b
Oslo,,HeLa,Biochem,Human,
Berlin,HCS,N/A,Cell-based,Mouse,
";

    #[test]
    fn test_load_drops_rows_without_type() {
        let catalog = Catalog::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.dropped(), 1);
    }

    #[test]
    fn test_na_token_is_missing() {
        let catalog = Catalog::from_reader(CSV.as_bytes()).unwrap();
        let berlin = catalog.for_site("Berlin");
        assert_eq!(berlin.len(), 1);
        assert_eq!(berlin[0].get(Attribute::CellType), None);
        assert_eq!(berlin[0].get(Attribute::AssayFormat), Some("Cell-based"));
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let err = Catalog::from_reader("Site,Type\nOslo,HTS\n".as_bytes()).unwrap_err();
        match err {
            Error::MissingColumn { column, .. } => assert_eq!(column, "Cell type"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sites_sorted_distinct() {
        let catalog = Catalog::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.sites(), vec!["Berlin", "Oslo"]);
    }
}
