// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the sortedness verifier.
//!
//! Arbitrary byte tables, sorted or not. The verifier must agree with
//! comparing against a sorted copy, and its reported position must be a
//! real inversion with nothing out of order before it.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortab::{first_unordered, is_sorted_slice, InvariantError, SortedTable};

fuzz_target!(|data: &[u8]| {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();

    // Property 1: sorted iff equal to its sorted copy
    assert_eq!(is_sorted_slice(data), data == sorted.as_slice());
    assert!(is_sorted_slice(&sorted));

    // Property 2: the first inversion is real and first
    if let Some(i) = first_unordered(data) {
        assert!(data[i] > data[i + 1]);
        assert!(is_sorted_slice(&data[..=i]));
    }

    // Property 3: SortedTable accepts exactly what the verifier accepts
    match SortedTable::new(data) {
        Ok(table) => assert_eq!(table.len(), data.len()),
        Err(InvariantError::Unsorted { position }) => {
            assert_eq!(Some(position), first_unordered(data));
        }
        Err(InvariantError::TableTooLong { len, max }) => assert!(len > max),
    }
});
