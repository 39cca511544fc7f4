//! # printstock-store: Inventory Store for Printstock
//!
//! This crate owns the printer and toner collections and every file
//! operation: CSV bulk import and the JSON save/load round trip.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Printstock Data Flow                              │
//! │                                                                         │
//! │  UI command (open / save / import / add / edit / delete)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  printstock-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Inventory   │    │   Importer    │    │  Persistence │  │   │
//! │  │   │  (store.rs)   │    │  (import.rs)  │    │ (persist.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ uid-keyed     │◄───│ validate +    │    │ JSON doc     │  │   │
//! │  │   │ collections   │    │ collapse rows │    │ round trip   │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │ StoreEvent after every mutation                    │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              ▼                                                          │
//! │  UI subscribers refresh their tables                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The [`Inventory`] collections and their operations
//! - [`import`] - CSV import pipeline (validate, collapse, construct)
//! - `persist` - The saved inventory document (private to the store)
//! - [`events`] - Change notifications for the presentation layer
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use printstock_store::Inventory;
//!
//! # fn main() -> Result<(), printstock_store::StoreError> {
//! let mut store = Inventory::new();
//!
//! // Bulk import; malformed rows drop individually
//! let report = store.import_toners(Path::new("toners.csv"))?;
//! println!("{} imported, {} dropped", report.imported, report.dropped);
//!
//! // Refresh the derived reorder columns before display
//! for toner in store.recompute_restock() {
//!     println!("{toner}: need {}", toner.needed);
//! }
//!
//! // Persist everything to one file
//! store.save_to(Path::new("inventory.json"))?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod events;
pub mod import;
pub mod store;

mod persist;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use events::StoreEvent;
pub use import::ImportReport;
pub use store::Inventory;
