// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over sorted lookup tables.
//!
//! Every entry point funnels into [`bisect`], a single non-generic bisection
//! loop that only knows a length and a probe callback. The typed wrappers turn
//! an entry type's [`TableEntry`] impl into that probe, so the algorithm is
//! compiled once no matter how many table types a program declares.
//!
//! # Guarantees
//!
//! - At most `floor(log2(n)) + 1` probes, zero for an empty table.
//! - A returned reference always points into the table that was passed in.
//! - No allocation, no mutation, no state between calls.
//!
//! If the table is not sorted the result is unspecified (some entry or
//! `None`), but still in bounds.

use std::cmp::Ordering;

use crate::entry::TableEntry;
use crate::verify::contracts::{check_match_in_bounds, check_probe_budget};

/// Largest table the engine accepts. Indices are held as `u16`.
pub const MAX_TABLE_LEN: usize = u16::MAX as usize;

/// Bisect `[0, len)` using `probe`.
///
/// `probe(i)` reports where the key falls relative to entry `i`:
/// `Greater` moves right, `Less` moves left, `Equal` stops at `i`.
pub(crate) fn bisect(len: u16, probe: &mut dyn FnMut(usize) -> Ordering) -> Option<usize> {
    // INVARIANT: a match, if any, lies in [lo, hi)
    let mut lo: u16 = 0;
    let mut hi: u16 = len;
    let mut probes: u32 = 0;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        probes += 1;
        match probe(usize::from(mid)) {
            Ordering::Equal => {
                check_match_in_bounds(usize::from(mid), usize::from(len));
                check_probe_budget(probes, usize::from(len));
                return Some(usize::from(mid));
            }
            Ordering::Greater => lo = mid + 1,
            Ordering::Less => hi = mid,
        }
    }

    check_probe_budget(probes, usize::from(len));
    None
}

/// Length of `table` as a bisection bound.
///
/// # Panics
/// Panics if `table` has more than [`MAX_TABLE_LEN`] entries.
#[inline]
fn table_len<E>(table: &[E]) -> u16 {
    match u16::try_from(table.len()) {
        Ok(len) => len,
        Err(_) => panic!(
            "lookup table has {} entries, more than the supported {}",
            table.len(),
            MAX_TABLE_LEN
        ),
    }
}

/// Find the entry matching `key` in a fixed-size sorted table.
///
/// The primary entry point. Table length is checked against
/// [`MAX_TABLE_LEN`] at compile time.
///
/// ```
/// use sortab::find;
///
/// const PRIMES: [u32; 6] = [2, 3, 5, 7, 11, 13];
///
/// assert_eq!(find(&7, &PRIMES), Some(&7));
/// assert_eq!(find(&9, &PRIMES), None);
/// ```
#[inline]
pub fn find<'a, K, E, const N: usize>(key: &K, table: &'a [E; N]) -> Option<&'a E>
where
    K: ?Sized,
    E: TableEntry<K>,
{
    const { assert!(N <= MAX_TABLE_LEN, "lookup table longer than MAX_TABLE_LEN") };
    find_in(key, table.as_slice())
}

/// Find the entry matching `key` in a sorted slice.
///
/// # Panics
/// Panics if `table` has more than [`MAX_TABLE_LEN`] entries.
#[inline]
pub fn find_in<'a, K, E>(key: &K, table: &'a [E]) -> Option<&'a E>
where
    K: ?Sized,
    E: TableEntry<K>,
{
    position_in(key, table).map(|i| &table[i])
}

/// Index of the entry matching `key` in a sorted slice.
///
/// # Panics
/// Panics if `table` has more than [`MAX_TABLE_LEN`] entries.
pub fn position_in<K, E>(key: &K, table: &[E]) -> Option<usize>
where
    K: ?Sized,
    E: TableEntry<K>,
{
    let len = table_len(table);
    bisect(len, &mut |i| table[i].compare_key(key))
}

/// Find an entry with an explicit comparator.
///
/// `cmp(entry)` must return the ordering of the sought key relative to
/// `entry`, as [`TableEntry::compare_key`] does.
///
/// ```
/// use sortab::find_by;
///
/// let names = ["ada", "grace", "linus"];
/// let hit = find_by(&names, |entry| "grace".cmp(entry));
/// assert_eq!(hit, Some(&"grace"));
/// ```
///
/// # Panics
/// Panics if `table` has more than [`MAX_TABLE_LEN`] entries.
pub fn find_by<E, F>(table: &[E], mut cmp: F) -> Option<&E>
where
    F: FnMut(&E) -> Ordering,
{
    let len = table_len(table);
    bisect(len, &mut |i| cmp(&table[i])).map(|i| &table[i])
}

/// Look up many keys against one table.
///
/// Results come back in the order of `keys`. With the `parallel` feature the
/// lookups are spread over the rayon pool; the table is only ever read.
///
/// # Panics
/// Panics if `table` has more than [`MAX_TABLE_LEN`] entries.
#[cfg(feature = "parallel")]
pub fn find_batch<'a, K, E>(keys: &[K], table: &'a [E]) -> Vec<Option<&'a E>>
where
    K: Sync,
    E: TableEntry<K> + Sync,
{
    use rayon::prelude::*;

    table_len(table);
    keys.par_iter().map(|key| find_in(key, table)).collect()
}

/// Look up many keys against one table.
///
/// Results come back in the order of `keys`.
///
/// # Panics
/// Panics if `table` has more than [`MAX_TABLE_LEN`] entries.
#[cfg(not(feature = "parallel"))]
pub fn find_batch<'a, K, E>(keys: &[K], table: &'a [E]) -> Vec<Option<&'a E>>
where
    E: TableEntry<K>,
{
    table_len(table);
    keys.iter().map(|key| find_in(key, table)).collect()
}
