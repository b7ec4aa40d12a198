//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and an instrumented probe so every suite
//! measures comparator calls the same way.

#![doc(hidden)]

use std::cmp::Ordering;
use std::fmt;

use crate::entry::{InOrder, Record, TableEntry};
use crate::search::bisect;

/// The four-row table used throughout the docs and tests.
pub fn scenario_table() -> [Record<u32, &'static str>; 4] {
    [
        Record::new(1, "a"),
        Record::new(5, "b"),
        Record::new(9, "c"),
        Record::new(12, "d"),
    ]
}

/// A table of `len` records with keys `0, step, 2 * step, ...`.
pub fn make_table(len: usize, step: u32) -> Vec<Record<u32, usize>> {
    (0..len)
        .map(|i| Record::new(i as u32 * step, i))
        .collect()
}

/// Run a search and count how many times the comparator was invoked.
pub fn probe_counted<K, E>(table: &[E], key: &K) -> (Option<usize>, u32)
where
    K: ?Sized,
    E: TableEntry<K>,
{
    let len = u16::try_from(table.len()).expect("fixture table longer than MAX_TABLE_LEN");
    let mut calls = 0u32;
    let position = bisect(len, &mut |i| {
        calls += 1;
        table[i].compare_key(key)
    });
    (position, calls)
}

/// A hand-written entry type with a `const` ordering, for exercising
/// [`assert_sorted!`](crate::assert_sorted) and `SortedTable` diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: i32,
    pub tag: char,
}

impl Tagged {
    pub const fn new(key: i32, tag: char) -> Self {
        Self { key, tag }
    }

    /// `const` ordering for [`assert_sorted!`](crate::assert_sorted).
    pub const fn in_order(first: &Self, second: &Self) -> bool {
        first.key <= second.key
    }
}

impl TableEntry<i32> for Tagged {
    fn compare_key(&self, key: &i32) -> Ordering {
        key.cmp(&self.key)
    }
}

impl InOrder for Tagged {
    fn are_in_order(first: &Self, second: &Self) -> bool {
        Self::in_order(first, second)
    }
}

impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.tag)
    }
}
