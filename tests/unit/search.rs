//! Lookups through the public entry points.

use std::cmp::Ordering;

use super::common::probe_bound;
use sortab::testing::{make_table, probe_counted, scenario_table, Tagged};
use sortab::{find, find_batch, find_by, find_in, position_in, Record, TableEntry, MAX_TABLE_LEN};

// ============================================================================
// FIXTURES
// ============================================================================

const LEVELS: [Record<&str, u8>; 5] = [
    Record::new("crit", 2),
    Record::new("debug", 7),
    Record::new("err", 3),
    Record::new("info", 6),
    Record::new("warn", 4),
];

const TAGGED: [Tagged; 4] = [
    Tagged::new(-3, 'a'),
    Tagged::new(0, 'b'),
    Tagged::new(8, 'c'),
    Tagged::new(21, 'd'),
];

/// Sorted by priority descending; the comparator encodes that.
#[derive(Debug, PartialEq)]
struct Job {
    priority: u8,
    name: &'static str,
}

impl TableEntry<u8> for Job {
    fn compare_key(&self, key: &u8) -> Ordering {
        self.priority.cmp(key)
    }
}

const JOBS: [Job; 3] = [
    Job { priority: 9, name: "page" },
    Job { priority: 5, name: "mail" },
    Job { priority: 1, name: "sweep" },
];

// ============================================================================
// HITS AND MISSES
// ============================================================================

#[test]
fn test_scenario_lookups() {
    let table = scenario_table();
    assert_eq!(find(&9, &table).map(|r| r.value), Some("c"));
    assert_eq!(find(&1, &table).map(|r| r.value), Some("a"));
    assert_eq!(find(&12, &table).map(|r| r.value), Some("d"));
    assert!(find(&4, &table).is_none());
    assert!(find(&0, &table).is_none());
    assert!(find(&13, &table).is_none());
}

#[test]
fn test_string_keys_borrow_as_str() {
    assert_eq!(find("err", &LEVELS).map(|r| r.value), Some(3));
    assert_eq!(find("warn", &LEVELS).map(|r| r.value), Some(4));
    assert!(find("trace", &LEVELS).is_none());
    assert!(find("", &LEVELS).is_none());
}

#[test]
fn test_plain_str_table() {
    const WORDS: [&str; 4] = ["alpha", "beta", "delta", "gamma"];
    assert_eq!(position_in("delta", &WORDS), Some(2));
    assert_eq!(find("alpha", &WORDS), Some(&"alpha"));
    assert!(find("epsilon", &WORDS).is_none());
}

#[test]
fn test_key_type_differs_from_entry_type() {
    let hit = find(&8, &TAGGED).unwrap();
    assert_eq!(hit.tag, 'c');
    assert!(find(&7, &TAGGED).is_none());
}

#[test]
fn test_comparator_defines_the_order() {
    assert_eq!(find(&5, &JOBS).map(|j| j.name), Some("mail"));
    assert_eq!(find(&9, &JOBS).map(|j| j.name), Some("page"));
    assert!(find(&4, &JOBS).is_none());
}

#[test]
fn test_result_borrows_from_table() {
    let table = scenario_table();
    let hit = find(&5, &table).unwrap();
    assert!(std::ptr::eq(hit, &table[1]));
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_empty_table_never_probes() {
    let table: [Record<u32, ()>; 0] = [];
    assert!(find(&7, &table).is_none());

    let (position, calls) = probe_counted::<u32, Record<u32, ()>>(&[], &7);
    assert_eq!(position, None);
    assert_eq!(calls, 0);
}

#[test]
fn test_single_entry_takes_one_probe() {
    let table = [Record::new(42u32, "only")];
    assert_eq!(probe_counted(&table, &42), (Some(0), 1));
    assert_eq!(probe_counted(&table, &41), (None, 1));
    assert_eq!(probe_counted(&table, &43), (None, 1));
}

#[test]
fn test_duplicate_keys_return_an_equal_entry() {
    let table = [
        Record::new(1u32, 'a'),
        Record::new(3, 'b'),
        Record::new(3, 'c'),
        Record::new(3, 'd'),
        Record::new(7, 'e'),
    ];
    let hit = find(&3, &table).unwrap();
    assert_eq!(hit.key, 3);
    assert!(['b', 'c', 'd'].contains(&hit.value));
    // Same table, same key, same answer.
    assert_eq!(find(&3, &table), Some(hit));
}

#[test]
fn test_unsorted_table_stays_in_bounds() {
    let table = [Record::new(9u32, ()), Record::new(1, ()), Record::new(5, ())];
    for key in 0..12 {
        if let Some(i) = position_in(&key, &table) {
            assert_eq!(table[i].key, key);
        }
    }
}

#[test]
fn test_largest_table_is_searchable() {
    let table = make_table(MAX_TABLE_LEN, 1);
    let last = (MAX_TABLE_LEN - 1) as u32;

    let (position, calls) = probe_counted(&table, &last);
    assert_eq!(position, Some(MAX_TABLE_LEN - 1));
    assert!(calls <= probe_bound(MAX_TABLE_LEN));
    assert_eq!(find_in(&0, &table).map(|r| r.value), Some(0));
    assert!(find_in(&(last + 1), &table).is_none());
}

#[test]
#[should_panic(expected = "more than the supported")]
fn test_oversized_slice_panics() {
    let table = make_table(MAX_TABLE_LEN + 1, 1);
    let _ = find_in(&0, &table);
}

// ============================================================================
// OTHER ENTRY POINTS
// ============================================================================

#[test]
fn test_find_by_matches_find_in() {
    let table = make_table(100, 3);
    for key in 0..310u32 {
        let by_closure = find_by(&table, |r| key.cmp(&r.key));
        assert_eq!(by_closure, find_in(&key, &table), "key {}", key);
    }
}

#[test]
fn test_position_agrees_with_find() {
    let table = make_table(37, 2);
    for key in 0..80u32 {
        let position = position_in(&key, &table);
        assert_eq!(position.map(|i| &table[i]), find_in(&key, &table));
    }
}

#[test]
fn test_batch_keeps_key_order() {
    let table = scenario_table();
    let keys = [12u32, 4, 1, 9, 100];
    let values: Vec<_> = find_batch(&keys, &table)
        .into_iter()
        .map(|hit| hit.map(|r| r.value))
        .collect();
    assert_eq!(values, vec![Some("d"), None, Some("a"), Some("c"), None]);
}
