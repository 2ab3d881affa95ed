use std::collections::BTreeMap;

use crate::auxiliary::ranges::{compress_used_indices, expand_range_str};

fn used_map(used: &[usize], unused: &[usize]) -> BTreeMap<usize, bool> {
    let mut map = BTreeMap::new();
    for &index in used {
        map.insert(index, true);
    }
    for &index in unused {
        map.insert(index, false);
    }
    map
}

#[test]
fn test_auxiliary_ranges_boundary_cases() {
    assert_eq!(compress_used_indices(&BTreeMap::new()), "");
    assert_eq!(compress_used_indices(&used_map(&[], &[1, 2, 3])), "");
    assert_eq!(compress_used_indices(&used_map(&[5], &[])), "5");
    assert_eq!(compress_used_indices(&used_map(&[5, 6, 7], &[])), "5..7");
    assert_eq!(
        compress_used_indices(&used_map(&[5, 6, 7, 10, 12, 13], &[8, 9, 11])),
        "5..7 10 12..13"
    );
}

#[test]
fn test_auxiliary_ranges_full_range() {
    assert_eq!(
        compress_used_indices(&used_map(&(1..=20).collect::<Vec<_>>(), &[])),
        "1..20"
    );
}

#[test]
fn test_auxiliary_ranges_isolated_indices() {
    assert_eq!(
        compress_used_indices(&used_map(&[2, 4, 6, 8], &[3, 5, 7])),
        "2 4 6 8"
    );
}

#[test]
fn test_auxiliary_ranges_unused_indices_split_runs() {
    // A gap caused by an unused index closes the run exactly as a missing entry does.
    assert_eq!(
        compress_used_indices(&used_map(&[1, 2, 4, 5], &[3])),
        "1..2 4..5"
    );
    assert_eq!(compress_used_indices(&used_map(&[1, 2, 4, 5], &[])), "1..2 4..5");
}

#[test]
fn test_auxiliary_ranges_determinism() {
    let map = used_map(&[3, 4, 9, 11, 12, 13, 40], &[5, 10]);
    let first = compress_used_indices(&map);
    assert_eq!(compress_used_indices(&map), first);
}

#[test]
fn test_auxiliary_ranges_expand() {
    assert_eq!(
        expand_range_str("5..7 10 12..13")
            .unwrap()
            .into_iter()
            .collect::<Vec<_>>(),
        vec![5, 6, 7, 10, 12, 13]
    );
    assert!(expand_range_str("").unwrap().is_empty());
    assert!(expand_range_str("7..5").is_err());
    assert!(expand_range_str("5..5").is_err());
    assert!(expand_range_str("a..b").is_err());
}

#[test]
fn test_auxiliary_ranges_round_trip_exhaustive() {
    // Exhaustive round-trip over every used/unused pattern of the indices 1..=10.
    for mask in 0u32..(1 << 10) {
        let mut map = BTreeMap::new();
        for bit in 0..10usize {
            map.insert(bit + 1, mask & (1 << bit) != 0);
        }
        let compressed = compress_used_indices(&map);
        let expanded = expand_range_str(&compressed).unwrap();
        let expected = map
            .iter()
            .filter(|(_, &used)| used)
            .map(|(&index, _)| index)
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(expanded, expected, "mask {mask:#b} => `{compressed}`");
    }
}
