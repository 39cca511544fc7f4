//! # CSV Importer
//!
//! Bulk import of printer and toner rows from CSV files.
//!
//! ## Import Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CSV Import Pipeline                               │
//! │                                                                         │
//! │  File on disk                                                           │
//! │       │  unreadable? → StoreError::ReadFile, nothing imported           │
//! │       ▼                                                                 │
//! │  Skip line 1 unconditionally (header, content never checked)           │
//! │       │                                                                 │
//! │       ▼  per line                                                       │
//! │  Split on comma (quoting disabled, surplus columns kept)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_*_row  ── reject? → warn! + drop, continue with next line    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Seen this exact line before? → collapse, continue                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Record constructed with a fresh Uid                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Import is purely additive: it never clears or replaces existing records,
//! and re-importing the same file produces new records with distinct uids.
//! The duplicate-line collapse only applies within a single file read.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use printstock_core::csv::{validate_printer_row, validate_toner_row};
use printstock_core::{Printer, RowError, Toner};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Import Report
// =============================================================================

/// What one CSV import did, for the UI to summarize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records constructed and merged into the collection.
    pub imported: usize,
    /// Lines rejected by validation (each logged individually).
    pub dropped: usize,
    /// Lines collapsed because their exact text already appeared in the file.
    pub duplicates: usize,
}

// =============================================================================
// Readers
// =============================================================================

/// Reads and validates printer rows from `path`.
///
/// Returns the constructed records plus the per-line statistics; the caller
/// (the store) merges the records additively.
pub(crate) fn read_printers(path: &Path) -> StoreResult<(Vec<Printer>, ImportReport)> {
    read_records(path, "printer", validate_printer_row, Printer::from_csv_row)
}

/// Reads and validates toner rows from `path`.
pub(crate) fn read_toners(path: &Path) -> StoreResult<(Vec<Toner>, ImportReport)> {
    read_records(path, "toner", validate_toner_row, Toner::from_csv_row)
}

/// Shared per-line pipeline: validate, collapse duplicates, construct.
fn read_records<R>(
    path: &Path,
    entity: &'static str,
    validate: fn(&[&str]) -> Result<(), RowError>,
    construct: fn(&[&str]) -> Result<R, RowError>,
) -> StoreResult<(Vec<R>, ImportReport)> {
    let rows = read_rows(path)?;

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut records = Vec::new();
    let mut report = ImportReport::default();

    for (line, row) in rows.into_iter().enumerate() {
        let fields: Vec<&str> = row.iter().map(String::as_str).collect();

        if let Err(reason) = validate(&fields) {
            // Skip-and-continue is product behavior: one diagnostic per
            // dropped line, never fatal to the import.
            warn!(entity, line = line + 2, %reason, "dropping invalid row");
            report.dropped += 1;
            continue;
        }

        if !seen.insert(row.clone()) {
            debug!(entity, line = line + 2, "collapsing duplicate row");
            report.duplicates += 1;
            continue;
        }

        records.push(construct(&fields)?);
        report.imported += 1;
    }

    debug!(
        entity,
        imported = report.imported,
        dropped = report.dropped,
        duplicates = report.duplicates,
        "import read complete"
    );
    Ok((records, report))
}

/// Reads every data line of `path` as a plain split-on-comma field list.
///
/// Quoting is disabled and record lengths are flexible: the import contract
/// is a fixed column layout with surplus columns ignored, not RFC 4180.
/// The first line is consumed as a header without looking at its content.
fn read_rows(path: &Path) -> StoreResult<Vec<Vec<String>>> {
    let file = File::open(path).map_err(|source| StoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const TONER_HEADER: &str = "printerModel,brand,model,printers,minStock,curStock,order,needed\n";

    #[test]
    fn test_header_is_skipped_unconditionally() {
        // The "header" here is a perfectly valid data line; it is still skipped.
        let file = csv_file("HP,Inc,M0,PrinterX,1,1,false,0\nHP,Inc,M1,PrinterX,5,2,true,3\n");
        let (toners, report) = read_toners(file.path()).unwrap();
        assert_eq!(toners.len(), 1);
        assert_eq!(toners[0].model, "M1");
        assert_eq!(report.imported, 1);
    }

    #[test]
    fn test_worked_example_row() {
        let file = csv_file(&format!("{TONER_HEADER}HP,Inc,M1,PrinterX,5,2,true,3\n"));
        let (toners, report) = read_toners(file.path()).unwrap();
        assert_eq!(report, ImportReport { imported: 1, dropped: 0, duplicates: 0 });
        assert_eq!(toners[0].min_stock, 5);
        assert_eq!(toners[0].cur_stock, 2);
        assert_eq!(toners[0].needed, 3);
        assert!(toners[0].order);
    }

    #[test]
    fn test_malformed_lines_drop_individually() {
        let file = csv_file(&format!(
            "{TONER_HEADER}\
             HP,Inc,M1,PrinterX,abc,2,true,3\n\
             HP,Inc,,PrinterX,5,2,true,3\n\
             HP,Inc,M2,PrinterX,5,2,true,3\n"
        ));
        let (toners, report) = read_toners(file.path()).unwrap();
        assert_eq!(toners.len(), 1);
        assert_eq!(toners[0].model, "M2");
        assert_eq!(report.dropped, 2);
    }

    #[test]
    fn test_identical_lines_collapse_to_one() {
        let file = csv_file(&format!(
            "{TONER_HEADER}\
             HP,Inc,M1,PrinterX,5,2,true,3\n\
             HP,Inc,M1,PrinterX,5,2,true,3\n"
        ));
        let (toners, report) = read_toners(file.path()).unwrap();
        assert_eq!(toners.len(), 1);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn test_surplus_columns_accepted() {
        let file = csv_file(&format!("{TONER_HEADER}HP,Inc,M1,PrinterX,5,2,true,3,spare\n"));
        let (toners, _) = read_toners(file.path()).unwrap();
        assert_eq!(toners.len(), 1);
    }

    #[test]
    fn test_printer_rows() {
        let file = csv_file(
            "barCode,description,category,location,serialNumber,manufacturer,division,department,campus,status\n\
             0021,LaserJet,Laser,Room 4,SN-100,HP,North,IT,Main,Active\n\
             0022,LaserJet,Laser,Room 5,,HP,North,IT,Main,Active\n",
        );
        let (printers, report) = read_printers(file.path()).unwrap();
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].serial_number, "SN-100");
        assert_eq!(report.dropped, 1); // empty serial number
    }

    #[test]
    fn test_unreadable_file_is_a_read_error() {
        let err = read_toners(Path::new("/nonexistent/toners.csv")).unwrap_err();
        assert!(matches!(err, StoreError::ReadFile { .. }));
    }
}
