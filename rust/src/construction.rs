//! Construction and configuration of TreeMap.
//!
//! A map is configured by two things: the comparator that orders its keys and
//! how many node slots to reserve up front. Neither can be invalid, so
//! construction is infallible.

use crate::arena::Arena;
use crate::comparator::{Comparator, NaturalOrder};
use crate::types::{TreeMap, DEFAULT_CAPACITY, NULL_NODE};

impl<K: Ord, V> TreeMap<K, V, NaturalOrder> {
    /// Create an empty map ordered by `K`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map = TreeMap::<i32, String>::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty map with room for `capacity` entries before the node
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Create an empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let mut map = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, comparator)
    }

    /// Create an empty map ordered by `comparator` with `capacity` node slots
    /// reserved.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: NULL_NODE,
            len: 0,
            modification_count: 0,
            comparator,
        }
    }

    /// The comparator ordering this map's keys.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Reserve room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }
}

impl<K, V, C: Comparator<K> + Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for TreeMap<K, V, C> {
    fn clone(&self) -> Self {
        // Node ids are arena indices, so a slot-for-slot copy keeps every
        // link valid.
        Self {
            arena: self.arena.clone(),
            root: self.root,
            len: self.len,
            modification_count: 0,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Copy + 'a, V: Copy + 'a, C: Comparator<K>> Extend<(&'a K, &'a V)>
    for TreeMap<K, V, C>
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (&key, &value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V, NaturalOrder> {
    fn from(entries: [(K, V); N]) -> Self {
        let mut map = Self::with_capacity(N);
        map.extend(entries);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::ReverseOrder;

    #[test]
    fn test_new_map_is_empty() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.root, NULL_NODE);
        assert_eq!(map.modification_count(), 0);
    }

    #[test]
    fn test_with_capacity_reserves_slots() {
        let map: TreeMap<i32, i32> = TreeMap::with_capacity(64);
        assert!(map.arena.stats().total_capacity >= 64);
    }

    #[test]
    fn test_reverse_order_comparator() {
        let mut map = TreeMap::with_comparator(ReverseOrder);
        map.extend([(1, ()), (2, ()), (3, ())]);
        assert_eq!(map.first_key(), Some(&3));
        assert_eq!(map.last_key(), Some(&1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = TreeMap::from([(1, "a"), (2, "b")]);
        let copy = original.clone();
        original.insert(3, "c");
        original.remove(&1);

        assert_eq!(copy.len(), 2);
        assert_eq!(copy.get(&1), Some(&"a"));
        assert!(copy.validate().is_ok());
        assert!(original.validate().is_ok());
    }

    #[test]
    fn test_extend_from_references() {
        let source = TreeMap::from([(1, 10), (2, 20)]);
        let mut target: TreeMap<i32, i32> = TreeMap::new();
        target.extend(source.iter());
        assert_eq!(target, source);
    }
}
