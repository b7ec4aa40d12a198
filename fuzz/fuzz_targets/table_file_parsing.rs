// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for table file parsing.
//!
//! Garbage in must be an Err, never a panic. Anything that parses must
//! sort into a table the verifier accepts.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortab::TableFile;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(table) = TableFile::from_json(text) else {
        return;
    };

    let len = table.entries.len();
    let sorted = table.into_sorted();
    assert_eq!(sorted.entries.len(), len);

    if len <= sortab::MAX_TABLE_LEN {
        assert!(sorted.verify().is_ok(), "sorted table failed verification");
    }
});
