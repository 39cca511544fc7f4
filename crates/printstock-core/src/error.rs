//! # Error Types
//!
//! Domain-specific error types for printstock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  printstock-core errors (this file)                                    │
//! │  ├── CoreError   - General domain errors                               │
//! │  └── RowError    - One rejected CSV row (dropped, never fatal)         │
//! │                                                                         │
//! │  printstock-store errors (separate crate)                              │
//! │  └── StoreError  - File I/O and persistence failures                   │
//! │                                                                         │
//! │  Flow: RowError → warn! + drop row   CoreError → StoreError → UI alert │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (column index, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Row Error
// =============================================================================

/// A single CSV row failed validation or construction.
///
/// Rejection is per-row: the importer logs the reason and continues with the
/// next line. Skip-and-continue is deliberate product behavior, so none of
/// these variants ever aborts an import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The row has fewer columns than the entity's fixed layout requires.
    #[error("row has {found} columns, expected at least {expected}")]
    TooShort { expected: usize, found: usize },

    /// A column that must carry a value is empty
    /// (serial number for printers, model for toners).
    #[error("column {column} ({name}) must not be empty")]
    EmptyRequired { column: usize, name: &'static str },

    /// A column expected to hold a non-negative integer does not parse.
    #[error("column {column} ({name}): '{value}' is not a non-negative integer")]
    NotAnInteger {
        column: usize,
        name: &'static str,
        value: String,
    },
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These should be caught at the operation boundary and translated to
/// user-friendly messages; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A CSV row could not be validated or turned into a record.
    #[error("invalid row: {0}")]
    Row(#[from] RowError),

    /// A record identifier string does not parse as a [`crate::Uid`].
    #[error("invalid record identifier '{value}'")]
    InvalidUid { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_messages() {
        let err = RowError::TooShort {
            expected: 8,
            found: 5,
        };
        assert_eq!(err.to_string(), "row has 5 columns, expected at least 8");

        let err = RowError::NotAnInteger {
            column: 4,
            name: "minStock",
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 4 (minStock): 'abc' is not a non-negative integer"
        );
    }

    #[test]
    fn test_row_error_converts_to_core_error() {
        let row_err = RowError::EmptyRequired {
            column: 2,
            name: "model",
        };
        let core_err: CoreError = row_err.into();
        assert!(matches!(core_err, CoreError::Row(_)));
    }
}
