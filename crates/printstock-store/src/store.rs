//! # Inventory Store
//!
//! Owns the two record collections and orchestrates every operation the
//! presentation layer can trigger.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Store                                  │
//! │                                                                         │
//! │  UI command              store operation            event emitted       │
//! │  ──────────────          ─────────────────          ─────────────       │
//! │  add new record      →   add_printer/add_toner   →  *Added              │
//! │  edit dialog OK      →   replace_*               →  *Replaced           │
//! │  edit dialog Delete  →   remove_*                →  *Removed            │
//! │  import CSV          →   import_printers/toners  →  Imported            │
//! │  open file           →   load_from               →  Loaded              │
//! │  save / save-as      →   save / save_to          →  (no mutation)       │
//! │  show toner table    →   recompute_restock       →  (derived only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Rules
//! - Collections are keyed by [`Uid`]: inserting a duplicate identifier is
//!   structurally impossible, it is rejected before the map is touched.
//! - Imports merge additively and never clear existing records.
//! - `load_from` replaces both collections wholesale, but only after the
//!   whole file has parsed; any failure leaves memory exactly as it was.
//! - `save_to` remembers the path only after the bytes hit the disk.
//!
//! Single-threaded by design: one interaction thread drives every mutation
//! to completion before control returns, so no locking discipline is needed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use printstock_core::{restock, Printer, Toner, Uid};

use crate::error::{StoreError, StoreResult};
use crate::events::{StoreEvent, Subscriber};
use crate::import::{self, ImportReport};
use crate::persist;

// =============================================================================
// Inventory
// =============================================================================

/// The inventory: every printer and toner currently tracked, keyed by uid.
pub struct Inventory {
    printers: BTreeMap<Uid, Printer>,
    toners: BTreeMap<Uid, Toner>,
    /// Set after a successful load or save; lets plain "save" skip the
    /// file prompt.
    save_location: Option<PathBuf>,
    subscribers: Vec<Subscriber>,
}

impl Inventory {
    /// Creates an empty inventory with no save location.
    pub fn new() -> Self {
        Inventory {
            printers: BTreeMap::new(),
            toners: BTreeMap::new(),
            save_location: None,
            subscribers: Vec::new(),
        }
    }

    // =========================================================================
    // Change Events
    // =========================================================================

    /// Registers a callback that runs after every successful mutation.
    ///
    /// The presentation layer subscribes once and re-renders its tables from
    /// events instead of holding live handles into the collections.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn emit(&mut self, event: StoreEvent) {
        debug!(?event, "store changed");
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    // =========================================================================
    // Printers
    // =========================================================================

    /// Adds a printer; its uid must not already be present.
    pub fn add_printer(&mut self, printer: Printer) -> StoreResult<()> {
        let uid = printer.uid();
        if self.printers.contains_key(&uid) {
            return Err(StoreError::DuplicateUid {
                entity: "printer",
                uid,
            });
        }
        self.printers.insert(uid, printer);
        self.emit(StoreEvent::PrinterAdded(uid));
        Ok(())
    }

    /// Overwrites the stored printer with the same uid (edit-dialog save).
    pub fn replace_printer(&mut self, printer: Printer) -> StoreResult<()> {
        let uid = printer.uid();
        match self.printers.get_mut(&uid) {
            Some(slot) => {
                *slot = printer;
                self.emit(StoreEvent::PrinterReplaced(uid));
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "printer",
                uid,
            }),
        }
    }

    /// Removes a printer, returning it.
    pub fn remove_printer(&mut self, uid: Uid) -> StoreResult<Printer> {
        let printer = self.printers.remove(&uid).ok_or(StoreError::NotFound {
            entity: "printer",
            uid,
        })?;
        self.emit(StoreEvent::PrinterRemoved(uid));
        Ok(printer)
    }

    /// Looks up one printer.
    pub fn printer(&self, uid: Uid) -> Option<&Printer> {
        self.printers.get(&uid)
    }

    /// Iterates all printers (uid order).
    pub fn printers(&self) -> impl Iterator<Item = &Printer> {
        self.printers.values()
    }

    /// Number of printers tracked.
    pub fn printer_count(&self) -> usize {
        self.printers.len()
    }

    // =========================================================================
    // Toners
    // =========================================================================

    /// Adds a toner; its uid must not already be present.
    pub fn add_toner(&mut self, toner: Toner) -> StoreResult<()> {
        let uid = toner.uid();
        if self.toners.contains_key(&uid) {
            return Err(StoreError::DuplicateUid {
                entity: "toner",
                uid,
            });
        }
        self.toners.insert(uid, toner);
        self.emit(StoreEvent::TonerAdded(uid));
        Ok(())
    }

    /// Overwrites the stored toner with the same uid (edit-dialog save).
    pub fn replace_toner(&mut self, toner: Toner) -> StoreResult<()> {
        let uid = toner.uid();
        match self.toners.get_mut(&uid) {
            Some(slot) => {
                *slot = toner;
                self.emit(StoreEvent::TonerReplaced(uid));
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "toner",
                uid,
            }),
        }
    }

    /// Removes a toner, returning it.
    pub fn remove_toner(&mut self, uid: Uid) -> StoreResult<Toner> {
        let toner = self.toners.remove(&uid).ok_or(StoreError::NotFound {
            entity: "toner",
            uid,
        })?;
        self.emit(StoreEvent::TonerRemoved(uid));
        Ok(toner)
    }

    /// Looks up one toner.
    pub fn toner(&self, uid: Uid) -> Option<&Toner> {
        self.toners.get(&uid)
    }

    /// Iterates all toners (uid order).
    pub fn toners(&self) -> impl Iterator<Item = &Toner> {
        self.toners.values()
    }

    /// Number of toners tracked.
    pub fn toner_count(&self) -> usize {
        self.toners.len()
    }

    // =========================================================================
    // Restock
    // =========================================================================

    /// Recomputes `needed`/`order` on every toner, then returns the
    /// refreshed collection for display.
    pub fn recompute_restock(&mut self) -> impl Iterator<Item = &Toner> {
        for toner in self.toners.values_mut() {
            restock::recompute(toner);
        }
        self.toners.values()
    }

    // =========================================================================
    // CSV Import
    // =========================================================================

    /// Imports printer rows from a CSV file, merging additively.
    ///
    /// Malformed lines drop individually (one warning each); an unreadable
    /// file aborts with nothing imported.
    pub fn import_printers(&mut self, path: &Path) -> StoreResult<ImportReport> {
        let (printers, report) = import::read_printers(path)?;
        for printer in printers {
            // Fresh uids cannot collide with anything already stored.
            self.printers.insert(printer.uid(), printer);
        }
        self.emit(StoreEvent::Imported {
            entity: "printer",
            count: report.imported,
        });
        Ok(report)
    }

    /// Imports toner rows from a CSV file, merging additively.
    pub fn import_toners(&mut self, path: &Path) -> StoreResult<ImportReport> {
        let (toners, report) = import::read_toners(path)?;
        for toner in toners {
            self.toners.insert(toner.uid(), toner);
        }
        self.emit(StoreEvent::Imported {
            entity: "toner",
            count: report.imported,
        });
        Ok(report)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Where the inventory was last saved to or loaded from.
    pub fn save_location(&self) -> Option<&Path> {
        self.save_location.as_deref()
    }

    /// Serializes both collections to `path` (save-as).
    ///
    /// The path is remembered only after a successful write; on failure the
    /// collections and the previous save location are untouched.
    pub fn save_to(&mut self, path: &Path) -> StoreResult<()> {
        persist::write_document(
            path,
            self.printers.values().cloned().collect(),
            self.toners.values().cloned().collect(),
        )?;
        self.save_location = Some(path.to_path_buf());
        Ok(())
    }

    /// Serializes to the remembered save location (plain save).
    pub fn save(&mut self) -> StoreResult<()> {
        let path = self
            .save_location
            .clone()
            .ok_or(StoreError::NoSaveLocation)?;
        self.save_to(&path)
    }

    /// Replaces both collections with the contents of `path` (open file).
    ///
    /// The file is parsed and checked completely before the swap, so a
    /// failed load leaves the in-memory state exactly as it was - no
    /// partial overwrite is observable.
    pub fn load_from(&mut self, path: &Path) -> StoreResult<()> {
        let (printers, toners) = persist::read_document(path)?;

        self.printers = printers;
        self.toners = toners;
        self.save_location = Some(path.to_path_buf());
        self.emit(StoreEvent::Loaded {
            printers: self.printers.len(),
            toners: self.toners.len(),
        });
        Ok(())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    use tempfile::{tempdir, NamedTempFile};

    fn toner(model: &str, min_stock: u32, cur_stock: u32) -> Toner {
        let mut t = Toner::new();
        t.model = model.to_string();
        t.min_stock = min_stock;
        t.cur_stock = cur_stock;
        t
    }

    fn printer(serial_number: &str) -> Printer {
        let mut p = Printer::new();
        p.serial_number = serial_number.to_string();
        p
    }

    #[test]
    fn test_add_remove_replace() {
        let mut store = Inventory::new();
        let p = printer("SN-1");
        let uid = p.uid();

        store.add_printer(p.clone()).unwrap();
        assert_eq!(store.printer_count(), 1);

        // Same uid again is rejected before the map is touched.
        assert!(matches!(
            store.add_printer(p.clone()),
            Err(StoreError::DuplicateUid { .. })
        ));
        assert_eq!(store.printer_count(), 1);

        let mut edited = p;
        edited.location = "Room 9".to_string();
        store.replace_printer(edited).unwrap();
        assert_eq!(store.printer(uid).unwrap().location, "Room 9");

        let removed = store.remove_printer(uid).unwrap();
        assert_eq!(removed.serial_number, "SN-1");
        assert!(matches!(
            store.remove_printer(uid),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_replace_requires_existing_record() {
        let mut store = Inventory::new();
        assert!(matches!(
            store.replace_toner(toner("M1", 1, 1)),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_recompute_restock_covers_every_toner() {
        let mut store = Inventory::new();
        store.add_toner(toner("M1", 5, 2)).unwrap();
        store.add_toner(toner("M2", 1, 4)).unwrap();

        let refreshed: Vec<(u32, bool)> = store
            .recompute_restock()
            .map(|t| (t.needed, t.order))
            .collect();
        assert!(refreshed.contains(&(3, true)));
        assert!(refreshed.contains(&(0, false)));
    }

    #[test]
    fn test_import_is_additive_and_reimport_makes_new_records() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "printerModel,brand,model,printers,minStock,curStock,order,needed\n\
             HP,Inc,M1,PrinterX,5,2,true,3\n"
        )
        .unwrap();

        let mut store = Inventory::new();
        store.add_toner(toner("hand-added", 0, 0)).unwrap();

        let report = store.import_toners(file.path()).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(store.toner_count(), 2);

        // Importing the same file again adds a second copy with its own uid.
        store.import_toners(file.path()).unwrap();
        assert_eq!(store.toner_count(), 3);
        let uids: std::collections::HashSet<Uid> = store.toners().map(|t| t.uid()).collect();
        assert_eq!(uids.len(), 3);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut store = Inventory::new();
        let t1 = toner("CF280A", 5, 2);
        let t2 = toner("TN-760", 1, 8);
        let mut p = printer("SN-1");
        p.notes = Some("flaky feeder".to_string());
        // Link order matters and must survive the trip.
        p.linked_toners = vec![t2.uid(), t1.uid()];
        let mut linked_back = t1.clone();
        linked_back.linked_printers = vec![p.uid()];

        store.add_printer(p.clone()).unwrap();
        store.add_toner(linked_back.clone()).unwrap();
        store.add_toner(t2.clone()).unwrap();

        store.save_to(&path).unwrap();
        assert_eq!(store.save_location(), Some(path.as_path()));

        let mut reloaded = Inventory::new();
        reloaded.load_from(&path).unwrap();
        assert_eq!(reloaded.save_location(), Some(path.as_path()));

        let back_p = reloaded.printer(p.uid()).unwrap();
        assert_eq!(back_p.serial_number, "SN-1");
        assert_eq!(back_p.notes.as_deref(), Some("flaky feeder"));
        assert_eq!(back_p.linked_toners, vec![t2.uid(), t1.uid()]);

        let back_t = reloaded.toner(t1.uid()).unwrap();
        assert_eq!(back_t.model, "CF280A");
        assert_eq!(back_t.min_stock, 5);
        assert_eq!(back_t.cur_stock, 2);
        assert_eq!(back_t.linked_printers, vec![p.uid()]);
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut saved = Inventory::new();
        saved.add_toner(toner("from-file", 1, 1)).unwrap();
        saved.save_to(&path).unwrap();

        let mut store = Inventory::new();
        store.add_toner(toner("pre-existing", 2, 2)).unwrap();
        store.add_printer(printer("SN-9")).unwrap();

        store.load_from(&path).unwrap();
        assert_eq!(store.toner_count(), 1);
        assert_eq!(store.printer_count(), 0);
        assert_eq!(store.toners().next().unwrap().model, "from-file");
    }

    #[test]
    fn test_save_failure_leaves_state_untouched() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("inventory.json");

        let mut store = Inventory::new();
        store.add_toner(toner("M1", 5, 2)).unwrap();
        store.save_to(&good).unwrap();

        // Writing to a directory path must fail.
        let err = store.save_to(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::WriteFile { .. }));

        // Collections and the previous save location are unchanged.
        assert_eq!(store.toner_count(), 1);
        assert_eq!(store.save_location(), Some(good.as_path()));
    }

    #[test]
    fn test_load_failure_leaves_state_untouched() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("broken.json");
        std::fs::write(&bad, "{ not valid").unwrap();

        let mut store = Inventory::new();
        store.add_toner(toner("keep-me", 1, 0)).unwrap();

        let err = store.load_from(&bad).unwrap_err();
        assert!(matches!(err, StoreError::ParseFile { .. }));
        assert_eq!(store.toner_count(), 1);
        assert_eq!(store.toners().next().unwrap().model, "keep-me");
        assert_eq!(store.save_location(), None);
    }

    #[test]
    fn test_plain_save_needs_a_location_first() {
        let mut store = Inventory::new();
        assert!(matches!(store.save(), Err(StoreError::NoSaveLocation)));

        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        store.save_to(&path).unwrap();
        store.add_toner(toner("M1", 1, 0)).unwrap();
        store.save().unwrap(); // reuses the remembered path

        let mut reloaded = Inventory::new();
        reloaded.load_from(&path).unwrap();
        assert_eq!(reloaded.toner_count(), 1);
    }

    #[test]
    fn test_events_fire_after_each_mutation() {
        let seen: Rc<RefCell<Vec<StoreEvent>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = Inventory::new();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let t = toner("M1", 1, 0);
        let uid = t.uid();
        store.add_toner(t).unwrap();
        store.remove_toner(uid).unwrap();

        // A failed mutation emits nothing.
        let _ = store.remove_toner(uid);

        assert_eq!(
            *seen.borrow(),
            vec![StoreEvent::TonerAdded(uid), StoreEvent::TonerRemoved(uid)]
        );
    }
}
