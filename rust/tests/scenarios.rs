//! End-to-end scenarios for the public TreeMap API.

use rbtreemap::{ReverseOrder, TreeError, TreeMap};
use rstest::rstest;

fn build(keys: &[i32]) -> TreeMap<i32, String> {
    keys.iter().map(|&k| (k, format!("value{}", k))).collect()
}

#[rstest]
fn ordered_queries_after_mixed_inserts() {
    let map = build(&[5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(map.first_key(), Some(&1));
    assert_eq!(map.last_key(), Some(&9));
    assert_eq!(map.next_key(&5), Some(&7));
    assert_eq!(map.previous_key(&5), Some(&4));
    assert!(map.validate().is_ok());
}

#[rstest]
#[case::ascending((1..=100).collect())]
#[case::descending((1..=100).rev().collect())]
#[case::interleaved((1..=50).flat_map(|i| [i, 101 - i]).collect())]
fn removing_even_keys_leaves_odd_keys(#[case] keys: Vec<i32>) {
    let mut map = build(&keys);
    for key in 1..=100 {
        if key % 2 == 0 {
            assert!(map.remove(&key).is_some());
        }
    }

    assert_eq!(map.len(), 50);
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        (1..=100).filter(|k| k % 2 == 1).collect::<Vec<_>>()
    );
    assert!(map.validate().is_ok());
}

#[rstest]
#[case::small(&[1, 2, 3])]
#[case::larger(&[10, 20, 30, 40, 50, 60])]
fn cursor_continues_after_removal(#[case] keys: &[i32]) {
    let mut map = build(keys);
    let mut cursor = map.cursor();

    assert_eq!(cursor.next(&map).unwrap().0, &keys[0]);
    assert_eq!(cursor.next(&map).unwrap().0, &keys[1]);
    assert_eq!(cursor.remove(&mut map).unwrap().0, keys[1]);
    assert_eq!(cursor.next(&map).unwrap().0, &keys[2]);
    assert!(!map.contains_key(&keys[1]));
}

#[rstest]
#[case::remove_other_key(|map: &mut TreeMap<i32, String>| { map.remove(&3); })]
#[case::insert_new_key(|map: &mut TreeMap<i32, String>| { map.insert(99, String::new()); })]
#[case::replace_value(|map: &mut TreeMap<i32, String>| { map.insert(2, String::new()); })]
#[case::clear(|map: &mut TreeMap<i32, String>| map.clear())]
fn cursor_detects_direct_modification(#[case] change: fn(&mut TreeMap<i32, String>)) {
    let mut map = build(&[1, 2, 3, 4]);
    let mut cursor = map.cursor();
    cursor.next(&map).unwrap();

    change(&mut map);

    let err = cursor.next(&map).unwrap_err();
    assert!(matches!(err, TreeError::ConcurrentModification { .. }));
    assert!(!err.is_contract_violation());
}

#[rstest]
fn range_view_bounds_and_contract() {
    let mut map = build(&(1..30).collect::<Vec<_>>());

    let view = map.range(10..20).unwrap();
    assert_eq!(view.first_key(), Some(&10));
    assert_eq!(view.last_key(), Some(&19));
    assert_eq!(view.len(), 10);

    let mut view = map.range_mut(10..20).unwrap();
    let err = view.insert(25, "v".to_string()).unwrap_err();
    assert_eq!(err, TreeError::KeyOutOfRange);
    assert!(err.is_contract_violation());
    assert_eq!(map.get(&25), Some(&"value25".to_string()));
}

#[rstest]
fn reinsert_after_emptying_gives_black_root() {
    let mut map = TreeMap::new();
    map.insert(1, "one");
    map.remove(&1);
    map.insert(2, "two");

    assert_eq!(map.len(), 1);
    assert_eq!(map.debug_structure(), "2 B\n");
    assert!(map.validate().is_ok());
}

#[rstest]
fn reverse_comparator_orders_everything_backwards() {
    let mut map = TreeMap::with_comparator(ReverseOrder);
    map.extend((1..=10).map(|i| (i, i)));

    assert_eq!(map.first_key(), Some(&10));
    assert_eq!(map.next_key(&5), Some(&4));
    assert_eq!(map.ceiling_key(&0), None);

    let view = map.range(8..=3).unwrap();
    assert_eq!(view.keys().copied().collect::<Vec<_>>(), [8, 7, 6, 5, 4, 3]);
    assert!(map.range(3..8).is_err());
    assert!(map.validate().is_ok());
}

#[rstest]
fn cursor_at_starts_from_ceiling() {
    let map = build(&[10, 20, 30]);
    let mut cursor = map.cursor_at(&20);
    assert_eq!(cursor.next(&map).unwrap().0, &20);

    let mut past_end = map.cursor_at(&31);
    assert!(!past_end.has_next());
    assert_eq!(past_end.next(&map), Err(TreeError::NoSuchElement));
    assert_eq!(past_end.previous(&map).unwrap().0, &30);
}
