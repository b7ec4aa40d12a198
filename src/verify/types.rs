// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make unsorted tables unrepresentable.
//!
//! Instead of hoping every caller remembered to sort, wrap the table in
//! [`SortedTable`]. Construction checks the length cap and the adjacent-pair
//! order once; afterwards every lookup runs on a table known to satisfy the
//! bisection precondition.
//!
//! # Example
//!
//! ```
//! use sortab::{Record, SortedTable};
//!
//! static CODES: [Record<u8, &str>; 3] = [
//!     Record::new(0, "OK"),
//!     Record::new(2, "NotFound"),
//!     Record::new(4, "InvalidArgs"),
//! ];
//!
//! let table = SortedTable::new(&CODES).unwrap();
//! assert_eq!(table.find(&2).map(|r| r.value), Some("NotFound"));
//! ```

use std::ops::Deref;

use log::debug;
use thiserror::Error;

use super::first_unordered;
use crate::entry::{InOrder, TableEntry};
use crate::error::Error;
use crate::search::{self, MAX_TABLE_LEN};

/// Error type for table invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The table has more entries than the engine can index.
    #[error("table has {len} entries, more than the supported {max}")]
    TableTooLong { len: usize, max: usize },
    /// `table[position]` and `table[position + 1]` are out of order.
    #[error("table not sorted at position {position}")]
    Unsorted { position: usize },
}

/// A borrowed table whose length and order were verified at construction.
///
/// # Invariants (enforced at construction)
/// - `len() <= MAX_TABLE_LEN`
/// - For all `i`: `are_in_order(table[i], table[i + 1])`
#[derive(Debug)]
pub struct SortedTable<'a, E> {
    entries: &'a [E],
}

impl<E> Clone for SortedTable<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for SortedTable<'_, E> {}

impl<'a, E: InOrder> SortedTable<'a, E> {
    /// Verify `entries` and wrap them.
    ///
    /// Returns `Err` if the table is too long or not sorted.
    pub fn new(entries: &'a [E]) -> Result<Self, InvariantError> {
        if entries.len() > MAX_TABLE_LEN {
            return Err(InvariantError::TableTooLong {
                len: entries.len(),
                max: MAX_TABLE_LEN,
            });
        }

        if let Some(position) = first_unordered(entries) {
            debug!("rejecting table of {} entries: unsorted at {}", entries.len(), position);
            return Err(InvariantError::Unsorted { position });
        }

        // INVARIANT: only a checked slice is ever wrapped
        debug!("verified sorted table of {} entries", entries.len());
        Ok(Self { entries })
    }
}

impl<'a, E> SortedTable<'a, E> {
    /// Find the entry matching `key`.
    pub fn find<K: ?Sized>(&self, key: &K) -> Option<&'a E>
    where
        E: TableEntry<K>,
    {
        search::find_in(key, self.entries)
    }

    /// Index of the entry matching `key`.
    pub fn position<K: ?Sized>(&self, key: &K) -> Option<usize>
    where
        E: TableEntry<K>,
    {
        search::position_in(key, self.entries)
    }

    /// Like [`find`](Self::find), but a miss is an [`Error::NotFound`].
    pub fn require<K: ?Sized>(&self, key: &K) -> Result<&'a E, Error>
    where
        E: TableEntry<K>,
    {
        self.find(key).ok_or(Error::NotFound)
    }

    /// Look many keys up; results follow the order of `keys`.
    #[cfg(feature = "parallel")]
    pub fn find_batch<K: Sync>(&self, keys: &[K]) -> Vec<Option<&'a E>>
    where
        E: TableEntry<K> + Sync,
    {
        search::find_batch(keys, self.entries)
    }

    /// Look many keys up; results follow the order of `keys`.
    #[cfg(not(feature = "parallel"))]
    pub fn find_batch<K>(&self, keys: &[K]) -> Vec<Option<&'a E>>
    where
        E: TableEntry<K>,
    {
        search::find_batch(keys, self.entries)
    }

    /// The verified entries.
    pub fn entries(&self) -> &'a [E] {
        self.entries
    }
}

impl<E> Deref for SortedTable<'_, E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        self.entries
    }
}

impl<'a, E> IntoIterator for SortedTable<'a, E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
