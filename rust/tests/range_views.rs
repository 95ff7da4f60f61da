//! Range views over every combination of bound kinds.

use std::collections::BTreeMap;
use std::ops::{Bound, RangeBounds};

use paste::paste;
use rbtreemap::{TreeError, TreeMap};

const PROBES: [i32; 8] = [0, 9, 10, 11, 19, 20, 21, 30];

fn backing() -> (TreeMap<i32, i32>, BTreeMap<i32, i32>) {
    let entries: Vec<(i32, i32)> = (1..30).map(|k| (k, k * 2)).collect();
    (entries.iter().copied().collect(), entries.into_iter().collect())
}

fn check_reads(lower: Bound<i32>, upper: Bound<i32>) {
    let (map, model) = backing();
    let view = map.range((lower, upper)).unwrap();
    let expected: Vec<(&i32, &i32)> = model.range((lower, upper)).collect();

    assert_eq!(view.iter().collect::<Vec<_>>(), expected);
    assert!(view.iter().rev().eq(expected.iter().rev().copied()));
    assert_eq!(view.len(), expected.len());
    assert_eq!(view.first_key_value(), expected.first().copied());
    assert_eq!(view.last_key_value(), expected.last().copied());

    for probe in PROBES {
        let inside = (lower, upper).contains(&probe);
        assert_eq!(view.contains_range_key(&probe), inside, "probe {}", probe);
        assert_eq!(view.get(&probe).is_some(), inside && model.contains_key(&probe));
    }
}

fn check_writes(lower: Bound<i32>, upper: Bound<i32>) {
    let (mut map, _) = backing();
    for probe in PROBES {
        let inside = (lower, upper).contains(&probe);
        let before = map.clone();
        let mut view = map.range_mut((lower, upper)).unwrap();

        let inserted = view.insert(probe, -1);
        let removed = view.remove(&probe);
        if inside {
            assert!(inserted.is_ok(), "probe {}", probe);
            assert_eq!(removed, Ok(Some(-1)));
            map.insert(probe, probe * 2);
        } else {
            assert_eq!(inserted, Err(TreeError::KeyOutOfRange));
            assert_eq!(removed, Err(TreeError::KeyOutOfRange));
        }
        // Restore in-range probes that were outside the backing keys.
        if !before.contains_key(&probe) {
            map.remove(&probe);
        }
        assert_eq!(map, before);
    }
}

fn check_clear(lower: Bound<i32>, upper: Bound<i32>) {
    let (mut map, mut model) = backing();
    map.range_mut((lower, upper)).unwrap().clear();
    model.retain(|k, _| !(lower, upper).contains(k));

    assert!(map.iter().eq(model.iter()));
    assert!(map.validate().is_ok());
}

macro_rules! bound_cases {
    ($($name:ident: $lower:expr, $upper:expr;)*) => {
        paste! {
            $(
                #[test]
                fn [<reads_ $name>]() {
                    check_reads($lower, $upper);
                }

                #[test]
                fn [<writes_ $name>]() {
                    check_writes($lower, $upper);
                }

                #[test]
                fn [<clear_ $name>]() {
                    check_clear($lower, $upper);
                }
            )*
        }
    };
}

bound_cases! {
    included_included: Bound::Included(10), Bound::Included(20);
    included_excluded: Bound::Included(10), Bound::Excluded(20);
    excluded_included: Bound::Excluded(10), Bound::Included(20);
    excluded_excluded: Bound::Excluded(10), Bound::Excluded(20);
    unbounded_excluded: Bound::Unbounded, Bound::Excluded(20);
    included_unbounded: Bound::Included(10), Bound::Unbounded;
    unbounded_unbounded: Bound::Unbounded, Bound::Unbounded;
}

#[test]
fn inverted_bounds_are_invalid() {
    let (map, _) = backing();
    for (lower, upper) in [
        (Bound::Included(20), Bound::Included(10)),
        (Bound::Excluded(15), Bound::Excluded(15)),
        (Bound::Included(11), Bound::Excluded(10)),
    ] {
        let err = map.range((lower, upper)).err();
        assert!(matches!(err, Some(TreeError::InvalidRange(_))), "{:?}", (lower, upper));
    }
}
