// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for lookup tables and the bisection engine.
//!
//! Debug-mode assertions that restate what the search promises. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Never check the sortedness precondition on the lookup path
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                         |
//! |--------------------------|--------------------------------------------------|
//! | `check_table_sorted`     | adjacent pairs satisfy `are_in_order`            |
//! | `check_match_in_bounds`  | a reported match lies inside the table           |
//! | `check_probe_budget`     | probes `<= floor(log2 n) + 1`                    |

use crate::entry::InOrder;
use crate::search::MAX_TABLE_LEN;
use crate::utils::max_probes;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // INVARIANT: the worst case over the largest table is 16 probes
    assert!(max_probes(MAX_TABLE_LEN) == 16);
    // INVARIANT: MAX_TABLE_LEN entries are addressable with u16 indices
    assert!(MAX_TABLE_LEN <= u16::MAX as usize);
};

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that a table is sorted.
///
/// O(n). Call it where a table is built, never per lookup.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_table_sorted<E: InOrder>(table: &[E]) {
    for i in 1..table.len() {
        debug_assert!(
            E::are_in_order(&table[i - 1], &table[i]),
            "Contract violation: table sorted - table[{}] and table[{}] out of order",
            i - 1,
            i
        );
    }
}

// ============================================================================
// BINARY SEARCH CONTRACTS
// ============================================================================

/// Check that a match index lies inside the table.
///
/// # Panics (debug builds only)
/// Panics if `index >= len`.
#[inline]
pub fn check_match_in_bounds(index: usize, len: usize) {
    debug_assert!(
        index < len,
        "Contract violation: match index {} >= table length {}",
        index,
        len
    );
}

/// Check the logarithmic probe budget.
///
/// # Panics (debug builds only)
/// Panics if a search over `len` entries used more than
/// `floor(log2(len)) + 1` comparator calls.
#[inline]
pub fn check_probe_budget(probes: u32, len: usize) {
    debug_assert!(
        probes <= max_probes(len),
        "Contract violation: {} probes over {} entries exceeds budget {}",
        probes,
        len,
        max_probes(len)
    );
}
