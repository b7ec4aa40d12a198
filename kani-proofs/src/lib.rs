// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the sortab bisection loop.
//!
//! This standalone crate extracts the bisection engine and proves its
//! properties for every table length the engine accepts, with the comparator
//! left fully nondeterministic.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no overflow in the midpoint or bound updates
//! 2. **Bounds**: every probed index and every returned index is `< len`
//! 3. **Budget**: at most `floor(log2 len) + 1` probes, so 16 for `u16`
//! 4. **Correctness**: on small sorted arrays, a hit is equal to the key and
//!    a miss means the key is absent

use std::cmp::Ordering;

/// Most comparisons any search may make: `floor(log2 u16::MAX) + 1`.
pub const MAX_PROBES: u32 = 16;

// ============================================================================
// BISECTION (copied from src/search.rs)
// ============================================================================

/// Bisect `[0, len)` using `probe`.
pub fn bisect(len: u16, probe: &mut dyn FnMut(usize) -> Ordering) -> Option<usize> {
    // INVARIANT: a match, if any, lies in [lo, hi)
    let mut lo: u16 = 0;
    let mut hi: u16 = len;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match probe(usize::from(mid)) {
            Ordering::Equal => return Some(usize::from(mid)),
            Ordering::Greater => lo = mid + 1,
            Ordering::Less => hi = mid,
        }
    }
    None
}

/// `floor(log2 len) + 1`, or 0 for an empty table.
pub fn max_probes(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        usize::BITS - len.leading_zeros()
    }
}

// ============================================================================
// KANI PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_ordering() -> Ordering {
        match kani::any::<u8>() % 3 {
            0 => Ordering::Less,
            1 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }

    /// Proof: for any length and any comparator answers, bisection never
    /// panics, never probes out of range and never exceeds the budget.
    #[kani::proof]
    #[kani::unwind(18)] // MAX_PROBES + 2
    fn verify_bisect_bounds_and_budget() {
        let len: u16 = kani::any();
        let mut probes = 0u32;
        let mut in_range = true;

        let result = bisect(len, &mut |i| {
            probes += 1;
            in_range &= i < usize::from(len);
            any_ordering()
        });

        kani::assert(in_range, "every probe must index inside the table");
        kani::assert(
            probes <= max_probes(usize::from(len)),
            "probe count must stay within floor(log2 len) + 1",
        );
        kani::assert(probes <= MAX_PROBES, "u16 tables need at most 16 probes");
        if let Some(i) = result {
            kani::assert(i < usize::from(len), "a match must be inside the table");
        }
    }

    /// Proof: an empty table is never probed.
    #[kani::proof]
    fn verify_empty_table_not_probed() {
        let mut probes = 0u32;
        let result = bisect(0, &mut |_| {
            probes += 1;
            any_ordering()
        });

        kani::assert(result.is_none(), "empty table has no match");
        kani::assert(probes == 0, "empty table must not be probed");
    }

    /// Proof: on sorted arrays of up to 8 entries, bisection finds a key
    /// exactly when it is present.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_bisect_matches_linear_scan() {
        const CAP: usize = 8;
        let len: usize = kani::any_where(|&n: &usize| n <= CAP);
        let mut table = [0u8; CAP];
        for i in 0..len {
            table[i] = kani::any();
        }
        for i in 1..len {
            kani::assume(table[i - 1] <= table[i]);
        }
        let key: u8 = kani::any();

        let result = bisect(len as u16, &mut |i| key.cmp(&table[i]));
        let present = table[..len].contains(&key);

        match result {
            Some(i) => kani::assert(table[i] == key, "a hit must equal the key"),
            None => kani::assert(!present, "a present key must be found"),
        }
    }
}
