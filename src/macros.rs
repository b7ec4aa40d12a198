// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time sortedness proofs for `const` lookup tables.

/// Fail compilation unless a `const` table is sorted.
///
/// Expands to an anonymous `const` item whose evaluation walks every adjacent
/// pair of the table. Four forms:
///
/// - `assert_sorted!(TABLE)`: elements compared with `<=` (integer tables).
/// - `assert_sorted!(TABLE, by_key = field)`: integer field compared with `<=`.
/// - `assert_sorted!(TABLE, by_str_key = field)`: `&str` field compared
///   bytewise, agreeing with `str::cmp`.
/// - `assert_sorted!(TABLE, path::to::in_order)`: a
///   `const fn(&E, &E) -> bool` decides each pair.
///
/// ```
/// use sortab::{assert_sorted, find, Record};
///
/// const LEVELS: [Record<&str, u8>; 3] = [
///     Record::new("crit", 1),
///     Record::new("info", 4),
///     Record::new("warn", 2),
/// ];
/// assert_sorted!(LEVELS, by_str_key = key);
///
/// assert_eq!(find("info", &LEVELS).map(|r| r.value), Some(4));
/// ```
///
/// An unsorted table does not build:
///
/// ```compile_fail
/// use sortab::{assert_sorted, Record};
///
/// const BAD: [Record<u8, ()>; 2] = [Record::new(9, ()), Record::new(1, ())];
/// assert_sorted!(BAD, by_key = key);
/// ```
#[macro_export]
macro_rules! assert_sorted {
    ($table:expr, by_key = $field:ident) => {
        const _: () = {
            let table = &$table;
            let mut i = 1;
            while i < table.len() {
                assert!(
                    table[i - 1].$field <= table[i].$field,
                    concat!("`", stringify!($table), "` is not sorted by `", stringify!($field), "`")
                );
                i += 1;
            }
        };
    };
    ($table:expr, by_str_key = $field:ident) => {
        const _: () = {
            let table = &$table;
            let mut i = 1;
            while i < table.len() {
                assert!(
                    $crate::utils::const_str_le(table[i - 1].$field, table[i].$field),
                    concat!("`", stringify!($table), "` is not sorted by `", stringify!($field), "`")
                );
                i += 1;
            }
        };
    };
    ($table:expr, $in_order:path) => {
        const _: () = {
            let table = &$table;
            let mut i = 1;
            while i < table.len() {
                assert!(
                    $in_order(&table[i - 1], &table[i]),
                    concat!("`", stringify!($table), "` is not sorted")
                );
                i += 1;
            }
        };
    };
    ($table:expr) => {
        const _: () = {
            let table = &$table;
            let mut i = 1;
            while i < table.len() {
                assert!(
                    table[i - 1] <= table[i],
                    concat!("`", stringify!($table), "` is not sorted")
                );
                i += 1;
            }
        };
    };
}
