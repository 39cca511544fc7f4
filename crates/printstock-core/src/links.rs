//! # Link Resolver
//!
//! Translates between identifier lists and live record references for the
//! Printer⇄Toner many-to-many relation.
//!
//! ## How Links Are Stored
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Printer { linked_toners: [uid-a, uid-c] }                              │
//! │       │                                                                 │
//! │       ▼  resolve_links(ids, store.toners())                             │
//! │  Resolution { records: [&TonerA, &TonerC], dropped: [] }               │
//! │       │                                                                 │
//! │       ▼  user re-selects in the link dialog                             │
//! │  ids_from_records([&TonerA, &TonerB]) → [uid-a, uid-b]                  │
//! │       │                                                                 │
//! │       ▼  written back wholesale                                         │
//! │  Printer { linked_toners: [uid-a, uid-b] }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An id with no matching candidate is dropped from the result but counted
//! on the [`Resolution`], so callers can surface "N stale links ignored"
//! instead of losing data silently.
//!
//! Pure lookup, no side effects. Linear scan per id (O(n·m)) - fine at the
//! target scale of hundreds of records.

use crate::id::Uid;
use crate::types::{Printer, Toner};

// =============================================================================
// HasUid
// =============================================================================

/// Anything that carries a record identity.
///
/// Implemented by both record types so link resolution is written once.
pub trait HasUid {
    fn uid(&self) -> Uid;
}

impl HasUid for Printer {
    fn uid(&self) -> Uid {
        Printer::uid(self)
    }
}

impl HasUid for Toner {
    fn uid(&self) -> Uid {
        Toner::uid(self)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// The outcome of resolving an identifier list against a candidate set.
#[derive(Debug)]
pub struct Resolution<'a, R> {
    /// Matched records, in the order their ids were requested.
    pub records: Vec<&'a R>,
    /// Requested ids with no matching candidate (stale links).
    pub dropped: Vec<Uid>,
}

impl<'a, R> Resolution<'a, R> {
    /// True when every requested id found a record.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Number of requested ids that found no record.
    #[inline]
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Resolves each id in order against the candidate records.
///
/// Matched records land in `Resolution::records` preserving the id order;
/// unmatched ids land in `Resolution::dropped`. Resolution itself never
/// fails - a stale link is a diagnostic, not an error.
pub fn resolve_links<'a, R, I>(ids: &[Uid], candidates: I) -> Resolution<'a, R>
where
    R: HasUid,
    I: IntoIterator<Item = &'a R>,
{
    let candidates: Vec<&'a R> = candidates.into_iter().collect();

    let mut records = Vec::with_capacity(ids.len());
    let mut dropped = Vec::new();
    for &id in ids {
        match candidates.iter().find(|record| record.uid() == id) {
            Some(record) => records.push(*record),
            None => dropped.push(id),
        }
    }

    Resolution { records, dropped }
}

/// Projects records back to their identifier list, preserving order.
pub fn ids_from_records<'a, R, I>(records: I) -> Vec<Uid>
where
    R: HasUid + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records.into_iter().map(|record| record.uid()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn toners(n: usize) -> Vec<Toner> {
        (0..n)
            .map(|i| {
                let mut t = Toner::new();
                t.model = format!("M{i}");
                t
            })
            .collect()
    }

    #[test]
    fn test_resolve_preserves_requested_order() {
        let candidates = toners(3);
        let ids = vec![candidates[2].uid(), candidates[0].uid()];
        let resolution = resolve_links(&ids, &candidates);
        assert!(resolution.is_complete());
        assert_eq!(resolution.records.len(), 2);
        assert_eq!(resolution.records[0].model, "M2");
        assert_eq!(resolution.records[1].model, "M0");
    }

    #[test]
    fn test_missing_id_is_counted_not_fatal() {
        let candidates = toners(2);
        let stale = Uid::fresh();
        let ids = vec![candidates[0].uid(), stale, candidates[1].uid()];

        let resolution = resolve_links(&ids, &candidates);
        // Shorter result than the input id list, no error raised.
        assert_eq!(resolution.records.len(), 2);
        assert_eq!(resolution.dropped_count(), 1);
        assert_eq!(resolution.dropped, vec![stale]);
        assert!(!resolution.is_complete());
    }

    #[test]
    fn test_empty_ids_resolve_to_empty() {
        let candidates = toners(2);
        let resolution = resolve_links(&[], &candidates);
        assert!(resolution.records.is_empty());
        assert!(resolution.is_complete());
    }

    #[test]
    fn test_ids_from_records_round_trip() {
        let candidates = toners(3);
        let ids = ids_from_records(&candidates);
        assert_eq!(ids.len(), 3);

        let resolution = resolve_links(&ids, &candidates);
        assert!(resolution.is_complete());
        assert_eq!(ids_from_records(resolution.records.iter().copied()), ids);
    }
}
