//! # Change Events
//!
//! Notifications the store emits after every successful mutating operation,
//! so the presentation layer re-renders from events instead of holding live
//! mutable handles into the collections.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI calls store.add_printer(p)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Collection mutated ── then ──► StoreEvent::PrinterAdded(uid)          │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  Ok(()) returned            every subscriber runs (table refresh)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failed operations emit nothing; subscribers only ever observe states that
//! actually exist.

use printstock_core::Uid;

/// A mutation that just happened to the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    PrinterAdded(Uid),
    PrinterReplaced(Uid),
    PrinterRemoved(Uid),
    TonerAdded(Uid),
    TonerReplaced(Uid),
    TonerRemoved(Uid),

    /// A CSV import merged new records into one of the collections.
    Imported {
        entity: &'static str,
        count: usize,
    },

    /// A load replaced both collections wholesale.
    Loaded {
        printers: usize,
        toners: usize,
    },
}

/// Callback registered by the presentation layer.
///
/// Boxed `FnMut` because the store is single-threaded by design; there is
/// exactly one writer and it is never concurrent with itself.
pub type Subscriber = Box<dyn FnMut(&StoreEvent)>;
