//! Iterator implementations for TreeMap.
//!
//! Borrowing iterators walk the tree with successor/predecessor steps from
//! both ends at once, so all of them are double-ended. They hold a shared
//! borrow of the map, which rules out modification while they are alive; use
//! a [`Cursor`](crate::Cursor) to remove entries during a walk.

use std::fmt;
use std::iter::FusedIterator;

use crate::types::{NodeId, TreeMap, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Two-ended in-order walk between `front` and `back`, both inclusive.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Walk {
    front: NodeId,
    back: NodeId,
    finished: bool,
}

/// Iterator over key-value pairs in key order.
pub struct Iter<'a, K, V, C> {
    map: &'a TreeMap<K, V, C>,
    walk: Walk,
    remaining: usize,
}

/// Iterator over keys in order.
pub struct Keys<'a, K, V, C> {
    items: Iter<'a, K, V, C>,
}

/// Iterator over values in key order.
pub struct Values<'a, K, V, C> {
    items: Iter<'a, K, V, C>,
}

/// Iterator over the key-value pairs of a key range.
pub struct RangeIter<'a, K, V, C> {
    map: &'a TreeMap<K, V, C>,
    walk: Walk,
}

/// Owning iterator over key-value pairs in key order.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

// ============================================================================
// TREEMAP ITERATOR METHODS
// ============================================================================

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns an iterator over all key-value pairs in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map = TreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
    /// let items: Vec<_> = map.iter().collect();
    /// assert_eq!(items, [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    ///
    /// let reversed: Vec<_> = map.iter().rev().map(|(k, _)| *k).collect();
    /// assert_eq!(reversed, [3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            map: self,
            walk: Walk::new(self.first_node(), self.last_node()),
            remaining: self.len,
        }
    }

    /// Returns an iterator over all keys in order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { items: self.iter() }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { items: self.iter() }
    }

    /// Walk from `first` to `last` inclusive; either being null means empty.
    pub(crate) fn range_iter(&self, first: NodeId, last: NodeId) -> RangeIter<'_, K, V, C> {
        RangeIter {
            map: self,
            walk: Walk::new(first, last),
        }
    }
}

// ============================================================================
// WALK IMPLEMENTATION
// ============================================================================

impl Walk {
    pub(crate) fn new(front: NodeId, back: NodeId) -> Self {
        Self {
            front,
            back,
            finished: front == NULL_NODE || back == NULL_NODE,
        }
    }

    fn next_front<K, V, C>(&mut self, map: &TreeMap<K, V, C>) -> NodeId {
        if self.finished {
            return NULL_NODE;
        }
        let current = self.front;
        if current == self.back {
            self.finished = true;
        } else {
            self.front = map.successor(current);
        }
        current
    }

    fn next_back<K, V, C>(&mut self, map: &TreeMap<K, V, C>) -> NodeId {
        if self.finished {
            return NULL_NODE;
        }
        let current = self.back;
        if current == self.front {
            self.finished = true;
        } else {
            self.back = map.predecessor(current);
        }
        current
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        let item = map.entry_of(self.walk.next_front(map))?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let map = self.map;
        let item = map.entry_of(self.walk.next_back(map))?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {}
impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            walk: self.walk,
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// KEYS / VALUES IMPLEMENTATION
// ============================================================================

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {}
impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {}
impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

// ============================================================================
// RANGEITER IMPLEMENTATION
// ============================================================================

impl<'a, K, V, C> Iterator for RangeIter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        map.entry_of(self.walk.next_front(map))
    }
}

impl<K, V, C> DoubleEndedIterator for RangeIter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let map = self.map;
        map.entry_of(self.walk.next_back(map))
    }
}

impl<K, V, C> FusedIterator for RangeIter<'_, K, V, C> {}

// ============================================================================
// OWNING ITERATION
// ============================================================================

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        // Collect the order first: successor() needs the links intact.
        let mut order = Vec::with_capacity(self.len);
        let mut current = self.first_node();
        while current != NULL_NODE {
            order.push(current);
            current = self.successor(current);
        }

        let entries: Vec<(K, V)> = order
            .into_iter()
            .filter_map(|id| self.arena.deallocate(id))
            .map(|node| (node.key, node.value))
            .collect();
        IntoIter {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

// ============================================================================
// TRAITS DEFINED IN TERMS OF ITERATION
// ============================================================================

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}
