//! # printstock-core: Pure Business Logic for Printstock
//!
//! This crate is the **heart** of Printstock, a desktop inventory tracker for
//! office printers and their compatible toner cartridges. It contains the
//! record schema and every consistency rule as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Printstock Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Desktop UI (external collaborator)              │   │
//! │  │    Tables ──► Edit Dialogs ──► Link Selectors ──► File Pickers  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 printstock-store (Inventory)                    │   │
//! │  │    add/remove/replace, CSV import, JSON save/load, events      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ printstock-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    id     │  │   types   │  │    csv    │  │  restock  │  │   │
//! │  │   │    Uid    │  │  Printer  │  │  layouts  │  │ shortfall │  │   │
//! │  │   │           │  │   Toner   │  │  checks   │  │  recompute│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DIALOGS • NO GLOBAL STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`id`] - Opaque [`Uid`] record identity (UUID v4 underneath)
//! - [`types`] - Record types ([`Printer`], [`Toner`]) and [`EditOutcome`]
//! - [`csv`] - Fixed column layouts and row validation rules
//! - [`restock`] - Toner shortfall arithmetic
//! - [`links`] - Printer⇄Toner link resolution
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, dialogs, network access is FORBIDDEN here
//! 3. **Opaque Identity**: Records compare by [`Uid`], never by mutable fields
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use printstock_core::restock;
//! use printstock_core::types::Toner;
//!
//! let mut toner = Toner::new();
//! toner.min_stock = 5;
//! toner.cur_stock = 2;
//!
//! // needed = max(0, min_stock - cur_stock), order = needed > 0
//! restock::recompute(&mut toner);
//! assert_eq!(toner.needed, 3);
//! assert!(toner.order);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod csv;
pub mod error;
pub mod id;
pub mod links;
pub mod restock;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use printstock_core::Uid` instead of
// `use printstock_core::id::Uid`

pub use error::{CoreError, CoreResult, RowError};
pub use id::Uid;
pub use links::{ids_from_records, resolve_links, HasUid, Resolution};
pub use types::{EditOutcome, Printer, Toner};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum column count for an imported printer row.
///
/// This is how many values the CSV line must contain, not how many fields
/// the Printer type has. Surplus columns are ignored.
pub const PRINTER_MIN_COLUMNS: usize = 10;

/// Minimum column count for an imported toner row.
///
/// This is how many values the CSV line must contain, not how many fields
/// the Toner type has. Surplus columns are ignored.
pub const TONER_MIN_COLUMNS: usize = 8;
