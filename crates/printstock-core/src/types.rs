//! # Record Types
//!
//! The two inventory record types and the edit-dialog outcome type.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Record Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Printer        │        │       Toner         │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  uid (opaque)       │        │  uid (opaque)       │                │
//! │  │  bar_code, serial…  │◄──────►│  brand, model…      │                │
//! │  │  linked_toners ─────┼──many──┼───── linked_printers│                │
//! │  └─────────────────────┘  many  └─────────────────────┘                │
//! │                                                                         │
//! │  EditOutcome<R>: Saved(R) | Deleted | Cancelled                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Every record has exactly one identity: its [`Uid`], assigned at creation
//! and immutable for the record's lifetime. Equality and hashing go through
//! the `Uid` only - two records with identical text fields are still two
//! records.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::csv::{column, parse_flag, parse_stock, printer_col, toner_col};
use crate::error::RowError;
use crate::id::Uid;
use crate::{PRINTER_MIN_COLUMNS, TONER_MIN_COLUMNS};

// =============================================================================
// Printer
// =============================================================================

/// An office printer tracked by the inventory.
///
/// All descriptive attributes are free-form text; nothing but `uid`
/// participates in identity. `linked_toners` is the printer's view of the
/// many-to-many relation with compatible toners, rewritten wholesale when
/// the user re-selects the linked set in an edit dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Printer {
    /// Unique identifier; immutable once the record is live in a store.
    uid: Uid,

    pub bar_code: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub division: String,
    pub department: String,
    pub campus: String,
    pub status: String,

    /// Free-form notes, optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Uids of compatible toners, in user-selected order.
    pub linked_toners: Vec<Uid>,
}

impl Printer {
    /// Creates a printer with all-empty fields and a fresh uid.
    pub fn new() -> Self {
        Printer {
            uid: Uid::fresh(),
            bar_code: String::new(),
            description: String::new(),
            category: String::new(),
            location: String::new(),
            serial_number: String::new(),
            manufacturer: String::new(),
            division: String::new(),
            department: String::new(),
            campus: String::new(),
            status: String::new(),
            notes: None,
            linked_toners: Vec::new(),
        }
    }

    /// Builds a printer from a validated CSV row, assigning a fresh uid.
    ///
    /// The row is assumed to have passed [`crate::csv::validate_printer_row`];
    /// this constructor performs no content validation of its own and fails
    /// only when a column is missing outright.
    pub fn from_csv_row(row: &[&str]) -> Result<Self, RowError> {
        let min = PRINTER_MIN_COLUMNS;
        Ok(Printer {
            uid: Uid::fresh(),
            bar_code: column(row, printer_col::BAR_CODE, min)?.to_string(),
            description: column(row, printer_col::DESCRIPTION, min)?.to_string(),
            category: column(row, printer_col::CATEGORY, min)?.to_string(),
            location: column(row, printer_col::LOCATION, min)?.to_string(),
            serial_number: column(row, printer_col::SERIAL_NUMBER, min)?.to_string(),
            manufacturer: column(row, printer_col::MANUFACTURER, min)?.to_string(),
            division: column(row, printer_col::DIVISION, min)?.to_string(),
            department: column(row, printer_col::DEPARTMENT, min)?.to_string(),
            campus: column(row, printer_col::CAMPUS, min)?.to_string(),
            status: column(row, printer_col::STATUS, min)?.to_string(),
            notes: None,
            linked_toners: Vec::new(),
        })
    }

    /// Returns the record's identity.
    #[inline]
    pub fn uid(&self) -> Uid {
        self.uid
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

impl PartialEq for Printer {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Printer {}

impl Hash for Printer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

impl fmt::Display for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Description: {}   SerialNumber: {}   Location: {}   Campus: {}",
            self.description, self.serial_number, self.location, self.campus
        )
    }
}

// =============================================================================
// Toner
// =============================================================================

/// A toner cartridge kind tracked by the inventory.
///
/// `needed` and `order` are derived by the restock calculator
/// ([`crate::restock::recompute`]) and are not independently settable by a
/// user; imports may seed them but the next recompute overwrites both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toner {
    /// Unique identifier; immutable once the record is live in a store.
    uid: Uid,

    pub printer_model: String,
    pub brand: String,
    pub model: String,
    /// Free text describing compatible printer models.
    pub printers: String,

    /// Stock level below which a reorder is needed.
    pub min_stock: u32,
    /// Cartridges currently on the shelf.
    pub cur_stock: u32,
    /// Derived: `max(0, min_stock - cur_stock)`.
    pub needed: u32,
    /// Derived: true iff `needed > 0`.
    pub order: bool,

    /// Uids of compatible printers, in user-selected order.
    pub linked_printers: Vec<Uid>,
}

impl Toner {
    /// Creates a toner with all-empty fields, zero stock and a fresh uid.
    pub fn new() -> Self {
        Toner {
            uid: Uid::fresh(),
            printer_model: String::new(),
            brand: String::new(),
            model: String::new(),
            printers: String::new(),
            min_stock: 0,
            cur_stock: 0,
            needed: 0,
            order: false,
            linked_printers: Vec::new(),
        }
    }

    /// Builds a toner from a validated CSV row, assigning a fresh uid.
    ///
    /// The row is assumed to have passed [`crate::csv::validate_toner_row`];
    /// this constructor fails only on a missing column or a malformed
    /// numeric column, never on content rules.
    pub fn from_csv_row(row: &[&str]) -> Result<Self, RowError> {
        let min = TONER_MIN_COLUMNS;
        Ok(Toner {
            uid: Uid::fresh(),
            printer_model: column(row, toner_col::PRINTER_MODEL, min)?.to_string(),
            brand: column(row, toner_col::BRAND, min)?.to_string(),
            model: column(row, toner_col::MODEL, min)?.to_string(),
            printers: column(row, toner_col::PRINTERS, min)?.to_string(),
            min_stock: parse_stock(row, toner_col::MIN_STOCK, "minStock", min)?,
            cur_stock: parse_stock(row, toner_col::CUR_STOCK, "curStock", min)?,
            order: parse_flag(column(row, toner_col::ORDER, min)?),
            needed: parse_stock(row, toner_col::NEEDED, "needed", min)?,
            linked_printers: Vec::new(),
        })
    }

    /// Returns the record's identity.
    #[inline]
    pub fn uid(&self) -> Uid {
        self.uid
    }
}

impl Default for Toner {
    fn default() -> Self {
        Toner::new()
    }
}

impl PartialEq for Toner {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Toner {}

impl Hash for Toner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

impl fmt::Display for Toner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}   Brand: {}   Model: {}",
            self.printer_model, self.brand, self.model
        )
    }
}

// =============================================================================
// Edit Outcome
// =============================================================================

/// The result of an edit dialog, returned by value.
///
/// ## Why a Tri-State?
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Edit dialog closes                                                     │
/// │       │                                                                 │
/// │       ├── user pressed OK      → Saved(record)  → store.replace_*      │
/// │       ├── user pressed Delete  → Deleted        → store.remove_*       │
/// │       └── user pressed Cancel  → Cancelled      → nothing happens      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
/// The outcome is always an explicit value; it is never inferred from a
/// missing result or a caught panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome<R> {
    /// User confirmed the dialog; carries the edited record.
    Saved(R),
    /// User asked for the record to be removed.
    Deleted,
    /// User closed or cancelled the dialog; nothing changes.
    Cancelled,
}

impl<R> EditOutcome<R> {
    /// True when the dialog was dismissed without effect.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, EditOutcome::Cancelled)
    }

    /// The edited record, if the user confirmed.
    pub fn saved(self) -> Option<R> {
        match self {
            EditOutcome::Saved(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
