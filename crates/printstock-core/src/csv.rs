//! # CSV Row Layouts and Validation
//!
//! The fixed column layouts for imported printer and toner rows, plus the
//! validation rules the importer runs before constructing records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Import Validation                                  │
//! │                                                                         │
//! │  Raw line ("HP,Inc,M1,PrinterX,5,2,true,3")                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Column count >= layout minimum?                                       │
//! │       │ no → RowError::TooShort                                        │
//! │       ▼                                                                 │
//! │  Required column non-empty? (printer: serialNumber, toner: model)      │
//! │       │ no → RowError::EmptyRequired                                   │
//! │       ▼                                                                 │
//! │  Numeric columns parse? (toner: minStock, curStock, needed)            │
//! │       │ no → RowError::NotAnInteger                                    │
//! │       ▼                                                                 │
//! │  OK → importer constructs a record with a fresh Uid                    │
//! │                                                                         │
//! │  A RowError drops that row only; the import continues.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Responsibility split: validation lives HERE, construction lives in
//! [`crate::types`]. The record constructors assume a validated row and only
//! fail on missing columns or malformed numbers, never on content rules.

use crate::error::RowError;
use crate::{PRINTER_MIN_COLUMNS, TONER_MIN_COLUMNS};

// =============================================================================
// Column Layouts
// =============================================================================

/// Column positions of a printer row (10-column fixed layout).
pub mod printer_col {
    pub const BAR_CODE: usize = 0;
    pub const DESCRIPTION: usize = 1;
    pub const CATEGORY: usize = 2;
    pub const LOCATION: usize = 3;
    pub const SERIAL_NUMBER: usize = 4;
    pub const MANUFACTURER: usize = 5;
    pub const DIVISION: usize = 6;
    pub const DEPARTMENT: usize = 7;
    pub const CAMPUS: usize = 8;
    pub const STATUS: usize = 9;
}

/// Column positions of a toner row (8-column fixed layout).
pub mod toner_col {
    pub const PRINTER_MODEL: usize = 0;
    pub const BRAND: usize = 1;
    pub const MODEL: usize = 2;
    pub const PRINTERS: usize = 3;
    pub const MIN_STOCK: usize = 4;
    pub const CUR_STOCK: usize = 5;
    pub const ORDER: usize = 6;
    pub const NEEDED: usize = 7;
}

// =============================================================================
// Column Access Helpers
// =============================================================================

/// Fetches a column by index, reporting the layout minimum on a miss.
pub(crate) fn column<'r>(
    row: &[&'r str],
    index: usize,
    layout_min: usize,
) -> Result<&'r str, RowError> {
    row.get(index).copied().ok_or(RowError::TooShort {
        expected: layout_min,
        found: row.len(),
    })
}

/// Parses a stock column as a non-negative integer.
pub(crate) fn parse_stock(
    row: &[&str],
    index: usize,
    name: &'static str,
    layout_min: usize,
) -> Result<u32, RowError> {
    let value = column(row, index, layout_min)?;
    value.trim().parse::<u32>().map_err(|_| RowError::NotAnInteger {
        column: index,
        name,
        value: value.to_string(),
    })
}

/// Parses a boolean-ish column the way the import format defines it:
/// `"true"` (any case) is true, every other string is false.
///
/// This parse can never fail, so an order column never rejects a row.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

// =============================================================================
// Row Validators
// =============================================================================

/// Validates a printer row against the fixed 10-column layout.
///
/// ## Rules
/// - At least [`PRINTER_MIN_COLUMNS`] columns; surplus columns are ignored
/// - `serialNumber` (column 4) must not be empty
/// - No numeric columns, so nothing else can reject
pub fn validate_printer_row(row: &[&str]) -> Result<(), RowError> {
    if row.len() < PRINTER_MIN_COLUMNS {
        return Err(RowError::TooShort {
            expected: PRINTER_MIN_COLUMNS,
            found: row.len(),
        });
    }

    if row[printer_col::SERIAL_NUMBER].is_empty() {
        return Err(RowError::EmptyRequired {
            column: printer_col::SERIAL_NUMBER,
            name: "serialNumber",
        });
    }

    Ok(())
}

/// Validates a toner row against the fixed 8-column layout.
///
/// ## Rules
/// - At least [`TONER_MIN_COLUMNS`] columns; surplus columns are ignored
/// - `model` (column 2) must not be empty
/// - `minStock`, `curStock`, `needed` must parse as non-negative integers
/// - `order` (column 6) is boolean-ish and never rejects (see [`parse_flag`])
pub fn validate_toner_row(row: &[&str]) -> Result<(), RowError> {
    if row.len() < TONER_MIN_COLUMNS {
        return Err(RowError::TooShort {
            expected: TONER_MIN_COLUMNS,
            found: row.len(),
        });
    }

    if row[toner_col::MODEL].is_empty() {
        return Err(RowError::EmptyRequired {
            column: toner_col::MODEL,
            name: "model",
        });
    }

    parse_stock(row, toner_col::MIN_STOCK, "minStock", TONER_MIN_COLUMNS)?;
    parse_stock(row, toner_col::CUR_STOCK, "curStock", TONER_MIN_COLUMNS)?;
    parse_stock(row, toner_col::NEEDED, "needed", TONER_MIN_COLUMNS)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
