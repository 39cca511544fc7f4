//! # Persistence
//!
//! Serializes the whole inventory to a single JSON document and reads it
//! back.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {                                                                      │
//! │    "printer": [ { "uid": "…", "bar_code": "…", …,                       │
//! │                   "linked_toners": ["…", "…"] }, … ],                   │
//! │    "toner":   [ { "uid": "…", "model": "…", …,                          │
//! │                   "linked_printers": ["…"] }, … ]                       │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Pretty-printed so the file stays human-inspectable.
//!
//! ## Round-Trip Contract
//! load(save(S)) reproduces every record's uid, all scalar fields and the
//! linked-identifier lists bit-for-bit, with link order preserved. This is
//! the core correctness property of the whole module; see the store tests.
//!
//! Reading parses and checks the ENTIRE document before anything is handed
//! to the store, so a failed load can never leave a partial replacement
//! behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use printstock_core::{HasUid, Printer, Toner, Uid};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Document
// =============================================================================

/// The root inventory object as it appears on disk.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct InventoryDoc {
    #[serde(rename = "printer", default)]
    pub printers: Vec<Printer>,
    #[serde(rename = "toner", default)]
    pub toners: Vec<Toner>,
}

// =============================================================================
// Write
// =============================================================================

/// Serializes both collections and writes them to `path`.
///
/// Serialization happens fully in memory before the first byte is written,
/// so a serialization failure never truncates an existing file.
pub(crate) fn write_document(
    path: &Path,
    printers: Vec<Printer>,
    toners: Vec<Toner>,
) -> StoreResult<()> {
    let doc = InventoryDoc { printers, toners };
    let json = serde_json::to_string_pretty(&doc).map_err(StoreError::Serialize)?;

    fs::write(path, json).map_err(|source| StoreError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Read
// =============================================================================

/// Reads `path` and rebuilds the uid-keyed collections.
///
/// The whole file is read and parsed, and every uid checked for duplicates,
/// before anything is returned - all failure exits leave the caller with
/// nothing to roll back.
pub(crate) fn read_document(
    path: &Path,
) -> StoreResult<(BTreeMap<Uid, Printer>, BTreeMap<Uid, Toner>)> {
    let json = fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let doc: InventoryDoc = serde_json::from_str(&json).map_err(|source| StoreError::ParseFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((
        keyed_by_uid(doc.printers, "printer")?,
        keyed_by_uid(doc.toners, "toner")?,
    ))
}

/// Keys records by uid, rejecting a file that carries one uid twice.
fn keyed_by_uid<R: HasUid>(
    records: Vec<R>,
    entity: &'static str,
) -> StoreResult<BTreeMap<Uid, R>> {
    let mut map = BTreeMap::new();
    for record in records {
        let uid = record.uid();
        if map.insert(uid, record).is_some() {
            return Err(StoreError::DuplicateInFile { entity, uid });
        }
    }
    Ok(map)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn test_document_round_trips_records_and_links() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut toner = Toner::new();
        toner.model = "CF280A".to_string();
        toner.min_stock = 4;

        let mut printer = Printer::new();
        printer.serial_number = "SN-1".to_string();
        printer.linked_toners = vec![toner.uid()];

        write_document(&path, vec![printer.clone()], vec![toner.clone()]).unwrap();
        let (printers, toners) = read_document(&path).unwrap();

        let back = &printers[&printer.uid()];
        assert_eq!(back.serial_number, "SN-1");
        assert_eq!(back.linked_toners, vec![toner.uid()]);
        assert_eq!(toners[&toner.uid()].min_stock, 4);
    }

    #[test]
    fn test_document_is_human_inspectable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        write_document(&path, vec![Printer::new()], vec![Toner::new()]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"printer\""));
        assert!(text.contains("\"toner\""));
        assert!(text.lines().count() > 2); // pretty-printed, not one long line
    }

    #[test]
    fn test_duplicate_uid_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let toner = Toner::new();
        write_document(&path, vec![], vec![toner.clone(), toner]).unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateInFile { entity: "toner", .. }
        ));
    }

    #[test]
    fn test_garbage_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, StoreError::ParseFile { .. }));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = read_document(Path::new("/nonexistent/inventory.json")).unwrap_err();
        assert!(matches!(err, StoreError::ReadFile { .. }));
    }
}
