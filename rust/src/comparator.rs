//! Key ordering for TreeMap.
//!
//! A map orders its keys through a [`Comparator`]. The default,
//! [`NaturalOrder`], defers to the key's `Ord` implementation; any
//! `Fn(&K, &K) -> Ordering` closure can be used instead.

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// Implementations must be consistent: antisymmetric, transitive, and stable
/// for the lifetime of the map. A comparator that violates this leaves the
/// map's contents unreachable through lookups, though never memory-unsafe.
pub trait Comparator<K: ?Sized> {
    /// Compare two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_and_reverse_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_closure_comparator() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert_eq!(
            by_len.compare(&"abc".to_string(), &"de".to_string()),
            Ordering::Greater
        );
    }
}
