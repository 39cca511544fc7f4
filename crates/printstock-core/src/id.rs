//! # Record Identity
//!
//! The opaque [`Uid`] every record carries for its entire life.
//!
//! ## Identity Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Uid Lifecycle                                   │
//! │                                                                         │
//! │  Record created (new / CSV row)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Uid::fresh() ── UUID v4, collision-free, never reused                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Immutable for the record's lifetime                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Save/load: serialized as the hyphenated string, parsed back            │
//! │  verbatim so identity survives the round trip                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Newtype?
//! `Uid` is `Copy` with structural equality and a total order, so it can key
//! a `BTreeMap` directly. Records are compared through it exclusively;
//! equality can never accidentally fall back to a mutable text field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Opaque, process-unique record identifier.
///
/// Assigned once at record creation via [`Uid::fresh`] and immutable
/// thereafter. The only place application code constructs a `Uid` from
/// existing data is deserialization, which must preserve identity across
/// save/load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(Uuid);

impl Uid {
    /// Generates a fresh, collision-free identifier.
    #[inline]
    pub fn fresh() -> Self {
        Uid(Uuid::new_v4())
    }

    /// Parses an identifier from its string form, with a domain error.
    ///
    /// For presentation code taking ids out of text fields; persistence goes
    /// through serde instead.
    pub fn parse(value: &str) -> CoreResult<Self> {
        value.parse().map_err(|_| CoreError::InvalidUid {
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Uid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Uid(Uuid::parse_str(s)?))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_uids_are_pairwise_distinct() {
        let uids: HashSet<Uid> = (0..1000).map(|_| Uid::fresh()).collect();
        assert_eq!(uids.len(), 1000);
    }

    #[test]
    fn test_uid_round_trips_through_display() {
        let uid = Uid::fresh();
        let parsed: Uid = uid.to_string().parse().unwrap();
        assert_eq!(uid, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Uid::parse("not-a-uid").is_err());
        let uid = Uid::fresh();
        assert_eq!(Uid::parse(&uid.to_string()).unwrap(), uid);
    }

    #[test]
    fn test_uid_serializes_as_plain_string() {
        let uid = Uid::fresh();
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, format!("\"{}\"", uid));
    }
}
