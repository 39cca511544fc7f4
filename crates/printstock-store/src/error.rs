//! # Store Error Types
//!
//! Error types for file and collection operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io / csv / serde_json error                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the file path and categorization      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI shows "Could not load data from file: <path>"                      │
//! │                                                                         │
//! │  Every variant is recoverable at the call boundary; the triggering     │
//! │  operation aborts with in-memory state unchanged.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

use printstock_core::{RowError, Uid};

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file could not be opened or read (import or load).
    #[error("could not load data from file: {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written (save).
    #[error("could not save data to file: {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV file could not be read record by record.
    #[error("could not read CSV data from file: {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A saved inventory file did not parse as an inventory document.
    #[error("could not parse inventory file: {path}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory inventory failed to serialize.
    /// Should not happen with plain record types; surfaced rather than hidden.
    #[error("could not serialize inventory")]
    Serialize(#[source] serde_json::Error),

    /// A saved file carries the same uid twice for one entity kind.
    #[error("inventory file contains duplicate {entity} uid {uid}")]
    DuplicateInFile { entity: &'static str, uid: Uid },

    /// Inserting a record whose uid is already present.
    #[error("a {entity} with uid {uid} already exists")]
    DuplicateUid { entity: &'static str, uid: Uid },

    /// Removing or replacing a record that is not in the store.
    #[error("{entity} not found: {uid}")]
    NotFound { entity: &'static str, uid: Uid },

    /// "Save" invoked before any load or save-as established a location.
    #[error("no save location set; use save-as first")]
    NoSaveLocation,

    /// A row passed validation but failed record construction.
    /// Indicates a layout mismatch between validator and constructor.
    #[error("invalid row: {0}")]
    Row(#[from] RowError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
