// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bisection against a linear scan.
//!
//! The fuzzer picks keys and a probe; we sort the keys so the precondition
//! holds, then compare every entry point with the obvious O(n) answer.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sortab::testing::probe_counted;
use sortab::utils::max_probes;
use sortab::{find_by, find_in, position_in, Record};

#[derive(Debug, Arbitrary)]
struct Input {
    keys: Vec<i16>,
    probe: i16,
}

fuzz_target!(|input: Input| {
    let mut keys = input.keys;
    keys.truncate(usize::from(u16::MAX));
    keys.sort_unstable();

    let table: Vec<Record<i16, usize>> = keys
        .iter()
        .enumerate()
        .map(|(i, &k)| Record::new(k, i))
        .collect();
    let probe = input.probe;

    // Property 1: presence agrees with a linear scan
    let hit = find_in(&probe, &table);
    assert_eq!(hit.is_some(), keys.contains(&probe), "membership mismatch");

    // Property 2: a hit compares equal to the probe
    if let Some(entry) = hit {
        assert_eq!(entry.key, probe);
    }

    // Property 3: all entry points agree
    let position = position_in(&probe, &table);
    assert_eq!(position.map(|i| &table[i]), hit);
    assert_eq!(find_by(&table, |r| probe.cmp(&r.key)), hit);

    // Property 4: comparison budget holds
    let (counted, calls) = probe_counted(&table, &probe);
    assert_eq!(counted, position);
    assert!(
        calls <= max_probes(table.len()),
        "{} calls for {} entries",
        calls,
        table.len()
    );
});
