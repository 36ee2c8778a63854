//! Runtime contracts for the overlay's invariants.
//!
//! Debug-mode assertions that check the properties the rest of the crate
//! relies on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the documented invariants of each type exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                         |
//! |----------------------------|--------------------------------------------------|
//! | `check_ids_unique`         | No two index entries share an id                 |
//! | `check_id_prefixes`        | Every id carries its category prefix             |
//! | `check_cap`                | No category bucket holds more than `CAP` entries |
//! | `check_order_preserved`    | Buckets keep index order                         |
//! | `check_selection_bounds`   | Selection is `None` or inside the flat order     |
//!
//! # Usage
//!
//! ```ignore
//! use unisearch::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_cap(&results);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // A zero cap would make every query look like "nothing found".
    assert!(crate::matcher::CAP > 0);
    // Three fixed buckets, each capped: the flat order is bounded.
    assert!(crate::matcher::CAP * 3 < isize::MAX as usize);
};

use std::collections::HashSet;

use crate::matcher::{GroupedResults, CAP};
use crate::types::{Category, SearchIndex, SearchableEntry};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that entry ids are unique across the whole index.
///
/// # Panics (debug builds only)
/// Panics on the first repeated id.
#[inline]
pub fn check_ids_unique(entries: &[SearchableEntry]) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            debug_assert!(
                seen.insert(entry.id.as_str()),
                "Contract violation: ids unique - entries[{}].id '{}' already present",
                i,
                entry.id
            );
        }
    }
}

/// Check that every id starts with its category's prefix.
#[inline]
pub fn check_id_prefixes(entries: &[SearchableEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        debug_assert!(
            entry.id.starts_with(entry.category.id_prefix()),
            "Contract violation: id prefix - entries[{}].id '{}' lacks prefix '{}'",
            i,
            entry.id,
            entry.category.id_prefix()
        );
    }
}

// ============================================================================
// GROUPING CONTRACTS
// ============================================================================

/// Check that no bucket exceeds `CAP`.
///
/// # Panics (debug builds only)
/// Panics if any category holds more than `CAP` entries.
#[inline]
pub fn check_cap(results: &GroupedResults) {
    for category in Category::ALL {
        debug_assert!(
            results.get(category).len() <= CAP,
            "Contract violation: cap - {} bucket has {} entries (cap {})",
            category,
            results.get(category).len(),
            CAP
        );
    }
}

/// Check that each bucket lists its entries in index order and only holds
/// entries of its own category.
#[inline]
pub fn check_order_preserved(index: &SearchIndex, results: &GroupedResults) {
    if cfg!(debug_assertions) {
        for category in Category::ALL {
            let mut last: Option<usize> = None;
            for entry in results.get(category) {
                debug_assert_eq!(
                    entry.category, category,
                    "Contract violation: bucket {} holds '{}' of category {}",
                    category, entry.id, entry.category
                );
                let position = index.entries.iter().position(|e| e.id == entry.id);
                debug_assert!(
                    position.is_some(),
                    "Contract violation: result '{}' is not in the index",
                    entry.id
                );
                if let (Some(prev), Some(pos)) = (last, position) {
                    debug_assert!(
                        prev < pos,
                        "Contract violation: order preserved - {} bucket out of index order at '{}'",
                        category,
                        entry.id
                    );
                }
                last = position;
            }
        }
    }
}

// ============================================================================
// NAVIGATION CONTRACTS
// ============================================================================

/// Check `-1 <= selection < len`, with `None` standing for `-1`.
#[inline]
pub fn check_selection_bounds(selection: Option<usize>, len: usize) {
    if let Some(i) = selection {
        debug_assert!(
            i < len,
            "Contract violation: selection bounds - selection {} >= flat order length {}",
            i,
            len
        );
    }
}
