//! GET operations for TreeMap.
//!
//! This module contains all the read operations: point lookups, the ordered
//! first/last/next/previous queries and the ceiling/floor/higher/lower bound
//! queries.

use std::ops::Index;

use crate::comparator::Comparator;
use crate::types::{TreeMap, NULL_NODE};

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current value of the modification counter.
    ///
    /// Every insert, value replacement, `get_mut`, removal and `clear` bumps
    /// it. Cursors compare against it to detect outside changes.
    pub fn modification_count(&self) -> u64 {
        self.modification_count
    }

    /// Smallest key in the map, `None` when empty.
    pub fn first_key(&self) -> Option<&K> {
        self.key_of(self.first_node())
    }

    /// Largest key in the map, `None` when empty.
    pub fn last_key(&self) -> Option<&K> {
        self.key_of(self.last_node())
    }

    /// Entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entry_of(self.first_node())
    }

    /// Entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entry_of(self.last_node())
    }

    pub(crate) fn bump_modification_count(&mut self) {
        self.modification_count = self.modification_count.wrapping_add(1);
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Get the stored key and its value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.entry_of(self.find_node(key))
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// Handing out the reference counts as a modification, so live cursors
    /// are invalidated even if the value is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "one");
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "ONE";
    /// }
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_node(key);
        if id == NULL_NODE {
            return None;
        }
        self.bump_modification_count();
        Some(&mut self.node_mut(id).value)
    }

    /// Check if key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key) != NULL_NODE
    }

    /// The key immediately after `key` in map order.
    ///
    /// `key` itself does not have to be present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map = TreeMap::from([(1, ()), (4, ()), (9, ())]);
    /// assert_eq!(map.next_key(&4), Some(&9));
    /// assert_eq!(map.next_key(&5), Some(&9));
    /// assert_eq!(map.next_key(&9), None);
    /// ```
    pub fn next_key(&self, key: &K) -> Option<&K> {
        self.higher_key(key)
    }

    /// The key immediately before `key` in map order.
    pub fn previous_key(&self, key: &K) -> Option<&K> {
        self.lower_key(key)
    }

    /// Least key greater than or equal to `key`.
    pub fn ceiling_key(&self, key: &K) -> Option<&K> {
        self.key_of(self.ceiling_node(key))
    }

    /// Greatest key less than or equal to `key`.
    pub fn floor_key(&self, key: &K) -> Option<&K> {
        self.key_of(self.floor_node(key))
    }

    /// Least key strictly greater than `key`.
    pub fn higher_key(&self, key: &K) -> Option<&K> {
        self.key_of(self.higher_node(key))
    }

    /// Greatest key strictly less than `key`.
    pub fn lower_key(&self, key: &K) -> Option<&K> {
        self.key_of(self.lower_node(key))
    }
}

impl<K, V, C: Comparator<K>> Index<&K> for TreeMap<K, V, C> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in TreeMap"),
        }
    }
}
