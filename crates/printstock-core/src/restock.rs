//! # Restock Calculator
//!
//! Derives a toner's `needed` quantity and `order` flag from its stock
//! levels.
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  needed = max(0, min_stock - cur_stock)                                 │
//! │  order  = needed > 0                                                    │
//! │                                                                         │
//! │  min=5 cur=2 → needed=3 order=true   (3 short of the minimum)          │
//! │  min=5 cur=5 → needed=0 order=false  (exactly at the minimum)          │
//! │  min=2 cur=9 → needed=0 order=false  (overstocked, never negative)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deterministic and idempotent: recomputing with unchanged stock writes the
//! same two values again. The store runs this over every toner before the
//! toner table is redisplayed.

use crate::types::Toner;

/// The reorder shortfall for a (min, cur) stock pair.
#[inline]
pub fn shortfall(min_stock: u32, cur_stock: u32) -> u32 {
    min_stock.saturating_sub(cur_stock)
}

/// Recomputes the two derived fields on a toner in place.
///
/// Touches nothing but `needed` and `order`.
pub fn recompute(toner: &mut Toner) {
    toner.needed = shortfall(toner.min_stock, toner.cur_stock);
    toner.order = toner.needed > 0;
}

// =============================================================================
// Unit Tests
// =============================================================================
