//! Property tests for lookup correctness and cost.
//!
//! Verifies that:
//! 1. A present key is always found, and the hit compares equal to it
//! 2. An absent key is never found
//! 3. No search uses more than `ceil(log2 n) + 1` comparisons
//! 4. Repeating a search gives the same answer

use super::common::{oracle_contains, probe_bound};
use proptest::prelude::*;
use sortab::testing::probe_counted;
use sortab::{find_batch, find_in, position_in, Record, SortedTable, TableKey, TableRow};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted key lists, duplicates allowed.
fn sorted_keys_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..300).prop_map(|mut keys| {
        keys.sort();
        keys
    })
}

/// Sorted key lists with no duplicates.
fn distinct_keys_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(-1000i32..1000, 0..300)
        .prop_map(|keys| keys.into_iter().collect())
}

/// Word-like strings for string-keyed tables.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}").unwrap()
}

fn records(keys: &[i32]) -> Vec<Record<i32, usize>> {
    keys.iter()
        .enumerate()
        .map(|(i, &k)| Record::new(k, i))
        .collect()
}

// ============================================================================
// CORRECTNESS
// ============================================================================

proptest! {
    /// Property: bisection and a linear scan agree on membership.
    #[test]
    fn prop_find_agrees_with_linear_scan(
        keys in sorted_keys_strategy(),
        probe in -1100i32..1100
    ) {
        let table = records(&keys);
        let hit = find_in(&probe, &table);

        prop_assert_eq!(hit.is_some(), oracle_contains(&table, &probe));
        if let Some(entry) = hit {
            prop_assert_eq!(entry.key, probe);
        }
    }

    /// Property: every key of a distinct table is found at its own index.
    #[test]
    fn prop_every_present_key_found_at_its_index(keys in distinct_keys_strategy()) {
        let table = records(&keys);
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(position_in(key, &table), Some(i));
        }
    }

    /// Property: keys between, below and above the table are all misses.
    #[test]
    fn prop_gaps_are_misses(keys in distinct_keys_strategy()) {
        let table = records(&keys);
        let doubled: Vec<_> = table.iter().map(|r| Record::new(r.key * 2, r.value)).collect();

        for key in &keys {
            prop_assert!(find_in(&(key * 2 + 1), &doubled).is_none());
        }
        prop_assert!(find_in(&i32::MIN, &doubled).is_none());
        prop_assert!(find_in(&i32::MAX, &doubled).is_none());
    }

    /// Property: repeated and batched lookups give the same answer.
    #[test]
    fn prop_lookups_are_deterministic(
        keys in sorted_keys_strategy(),
        probes in prop::collection::vec(-1100i32..1100, 0..40)
    ) {
        let table = records(&keys);
        let singles: Vec<_> = probes.iter().map(|p| position_in(p, &table)).collect();
        let again: Vec<_> = probes.iter().map(|p| position_in(p, &table)).collect();
        prop_assert_eq!(&singles, &again);

        let batched: Vec<_> = find_batch(&probes, &table)
            .into_iter()
            .map(|hit| hit.map(|r| r.value))
            .collect();
        let single_values: Vec<_> = singles.iter().map(|p| p.map(|i| table[i].value)).collect();
        prop_assert_eq!(batched, single_values);
    }

    /// Property: string tables behave like integer tables.
    #[test]
    fn prop_string_keys_agree_with_linear_scan(
        words in prop::collection::btree_set(word_strategy(), 0..100),
        probe in word_strategy()
    ) {
        let rows: Vec<TableRow> = words
            .iter()
            .map(|w| TableRow { key: TableKey::Text(w.clone()), value: None })
            .collect();
        let table = SortedTable::new(&rows).unwrap();
        let key = TableKey::Text(probe.clone());

        prop_assert_eq!(table.find(&key).is_some(), words.contains(&probe));
    }
}

// ============================================================================
// COST
// ============================================================================

proptest! {
    /// Property: comparator calls never exceed `ceil(log2 n) + 1`.
    #[test]
    fn prop_probe_count_within_bound(
        keys in sorted_keys_strategy(),
        probe in -1100i32..1100
    ) {
        let table = records(&keys);
        let (position, calls) = probe_counted(&table, &probe);

        prop_assert!(
            calls <= probe_bound(table.len()),
            "{} calls for {} entries", calls, table.len()
        );
        prop_assert_eq!(position, position_in(&probe, &table));
    }

    /// Property: a hit costs at least one comparison, an empty table none.
    #[test]
    fn prop_probe_count_floor(keys in sorted_keys_strategy(), probe in -1100i32..1100) {
        let table = records(&keys);
        let (_, calls) = probe_counted(&table, &probe);
        prop_assert_eq!(calls == 0, table.is_empty());
    }
}
