//! Sortedness verification: compile-time, construction-time and runtime.

use sortab::testing::{make_table, scenario_table, Tagged};
use sortab::{
    assert_sorted, first_unordered, is_sorted, is_sorted_slice, Error, InvariantError, Record,
    SortedTable,
};

// ============================================================================
// COMPILE-TIME PROOFS
// ============================================================================

const PORTS: [Record<u16, &str>; 4] = [
    Record::new(22, "ssh"),
    Record::new(53, "dns"),
    Record::new(80, "http"),
    Record::new(443, "https"),
];
assert_sorted!(PORTS, by_key = key);

const MIME: [Record<&str, &str>; 3] = [
    Record::new("css", "text/css"),
    Record::new("html", "text/html"),
    Record::new("js", "text/javascript"),
];
assert_sorted!(MIME, by_str_key = key);

const MARKS: [Tagged; 3] = [Tagged::new(-1, 'x'), Tagged::new(-1, 'y'), Tagged::new(4, 'z')];
assert_sorted!(MARKS, Tagged::in_order);

const FIBS: [u64; 7] = [1, 1, 2, 3, 5, 8, 13];
assert_sorted!(FIBS);

#[test]
fn test_const_checked_tables_agree_at_runtime() {
    assert!(is_sorted(&PORTS));
    assert!(is_sorted(&MIME));
    assert!(is_sorted(&MARKS));
    assert!(is_sorted(&FIBS));
}

// ============================================================================
// RUNTIME CHECKS
// ============================================================================

#[test]
fn test_scenario_sorted_and_swapped_unsorted() {
    let table = scenario_table();
    assert!(is_sorted(&table));

    let swapped = [
        Record::new(1u32, "a"),
        Record::new(9, "c"),
        Record::new(5, "b"),
        Record::new(12, "d"),
    ];
    assert!(!is_sorted(&swapped));
    assert_eq!(first_unordered(&swapped), Some(1));
}

#[test]
fn test_every_adjacent_swap_is_detected() {
    let table = make_table(20, 5);
    for i in 0..table.len() - 1 {
        let mut broken = table.clone();
        broken.swap(i, i + 1);
        assert_eq!(first_unordered(&broken), Some(i), "swap at {}", i);
    }
}

#[test]
fn test_equal_neighbours_are_in_order() {
    assert!(is_sorted(&[3u8, 3, 3]));
    assert!(is_sorted(&["a", "a", "b"]));
}

#[test]
fn test_empty_and_single_are_sorted() {
    assert!(is_sorted_slice::<Record<u8, ()>>(&[]));
    assert!(is_sorted(&[Tagged::new(0, 'q')]));
}

// ============================================================================
// SORTED TABLE
// ============================================================================

#[test]
fn test_sorted_table_over_static_rows() {
    let table = SortedTable::new(&PORTS).unwrap();
    assert_eq!(table.find(&80).map(|r| r.value), Some("http"));
    assert_eq!(table.position(&443), Some(3));
    assert!(matches!(table.require(&8080), Err(Error::NotFound)));
}

#[test]
fn test_sorted_table_reports_first_bad_pair() {
    let rows = vec![1u32, 2, 3, 10, 4, 5, 0];
    assert_eq!(
        SortedTable::new(&rows).unwrap_err(),
        InvariantError::Unsorted { position: 3 }
    );
}

#[test]
fn test_sorted_table_error_converts() {
    let rows = [5u8, 1];
    let err: Error = SortedTable::new(&rows).unwrap_err().into();
    assert_eq!(err.name(), "Failed");
    assert_eq!(err.to_string(), "table not sorted at position 0");
}
