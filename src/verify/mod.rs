// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: sortedness checks, type-level invariants and
//! runtime contracts.
//!
//! Binary search never checks its own precondition; doing so on every lookup
//! would cost O(n) and defeat the point. Sortedness is established once,
//! before the table is used, by one of:
//!
//! 1. **Compile time**: [`assert_sorted!`](crate::assert_sorted) walks a
//!    `const` table during const evaluation. An unsorted table fails the build.
//!
//! 2. **Construction**: [`SortedTable::new`] checks length and order once and
//!    carries the proof in its type from then on.
//!
//! 3. **Tests**: [`is_sorted`] / [`first_unordered`] run the same adjacent-pair
//!    walk at runtime, for tables that are not `const`.
//!
//! [`contracts`] adds debug-build assertions on the search output itself.

mod types;
pub mod contracts;

pub use types::*;

use crate::entry::InOrder;

/// `true` if every adjacent pair of `table` is in order.
///
/// Tables of length 0 and 1 are sorted.
///
/// ```
/// use sortab::{is_sorted, Record};
///
/// assert!(is_sorted(&[Record::new(1, "a"), Record::new(5, "b")]));
/// assert!(!is_sorted(&[Record::new(9, ()), Record::new(1, ())]));
/// ```
#[inline]
pub fn is_sorted<E: InOrder, const N: usize>(table: &[E; N]) -> bool {
    is_sorted_slice(table)
}

/// Slice form of [`is_sorted`].
pub fn is_sorted_slice<E: InOrder>(table: &[E]) -> bool {
    first_unordered(table).is_none()
}

/// Index `i` of the first pair `(table[i], table[i + 1])` that is out of order.
pub fn first_unordered<E: InOrder>(table: &[E]) -> Option<usize> {
    // INVARIANT: every pair before the returned index is in order
    table
        .windows(2)
        .position(|pair| !E::are_in_order(&pair[0], &pair[1]))
}
