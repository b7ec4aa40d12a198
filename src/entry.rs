// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The comparator contract every searchable record type implements.
//!
//! Two relations, kept apart on purpose:
//!
//! - [`TableEntry::compare_key`] is what the search engine calls. It compares a
//!   key (possibly of another type) against one entry.
//! - [`InOrder::are_in_order`] compares two entries of the same type. Only the
//!   verifier calls it, never the search.
//!
//! # Sign convention
//!
//! `compare_key` answers "where does the key fall relative to this entry",
//! the same way `strcmp(key, entry)` would:
//!
//! | Result              | Meaning                         | Search narrows to |
//! |---------------------|---------------------------------|-------------------|
//! | `Ordering::Equal`   | exact match                     | (stops)           |
//! | `Ordering::Greater` | key sorts after this entry      | upper half        |
//! | `Ordering::Less`    | key sorts before this entry     | lower half        |
//!
//! Note this is the mirror image of `slice::binary_search_by`, whose closure
//! returns the ordering of the element relative to the target.
//!
//! # Consistency
//!
//! If `are_in_order(a, b)` holds, then for every key equal to `b`,
//! `a.compare_key(key)` must not be `Less`. Break this and bisection can walk
//! away from a present key.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// A record that can be compared against a lookup key of type `K`.
pub trait TableEntry<K: ?Sized> {
    /// Three-way comparison of `key` against this entry.
    fn compare_key(&self, key: &K) -> Ordering;
}

/// Ordering between two records of the same type, used to verify tables.
pub trait InOrder {
    /// `true` if `first` may precede `second` in a sorted table.
    fn are_in_order(first: &Self, second: &Self) -> bool;
}

macro_rules! impl_scalar_entry {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TableEntry<$ty> for $ty {
                #[inline]
                fn compare_key(&self, key: &$ty) -> Ordering {
                    key.cmp(self)
                }
            }

            impl InOrder for $ty {
                #[inline]
                fn are_in_order(first: &Self, second: &Self) -> bool {
                    first <= second
                }
            }
        )*
    };
}

impl_scalar_entry!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

impl TableEntry<str> for &str {
    #[inline]
    fn compare_key(&self, key: &str) -> Ordering {
        key.cmp(*self)
    }
}

impl InOrder for &str {
    #[inline]
    fn are_in_order(first: &Self, second: &Self) -> bool {
        first <= second
    }
}

/// A key paired with a value, ordered by key alone.
///
/// The usual shape of a lookup table row:
///
/// ```
/// use sortab::{find, Record};
///
/// static PORTS: [Record<u16, &str>; 3] = [
///     Record::new(22, "ssh"),
///     Record::new(80, "http"),
///     Record::new(443, "https"),
/// ];
///
/// assert_eq!(find(&80, &PORTS).map(|r| r.value), Some("http"));
/// assert!(find(&8080, &PORTS).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Record<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V, Q> TableEntry<Q> for Record<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    #[inline]
    fn compare_key(&self, key: &Q) -> Ordering {
        key.cmp(self.key.borrow())
    }
}

impl<K: Ord, V> InOrder for Record<K, V> {
    #[inline]
    fn are_in_order(first: &Self, second: &Self) -> bool {
        first.key <= second.key
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Record<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}
