//! Bidirectional cursor over a TreeMap.
//!
//! A [`Cursor`] is a detached position: it stores node ids and the map's
//! modification count, not a borrow of the map. Every operation takes the map
//! as an argument. That lets the map be changed directly while a cursor
//! exists, and lets the cursor notice: any change it did not make itself
//! fails its next operation with [`TreeError::ConcurrentModification`].
//!
//! The cursor sits *between* two entries. `next` returns the entry after the
//! gap and `previous` the one before it.
//!
//! A cursor must only be used with the map that created it.

use std::marker::PhantomData;

use tracing::debug;

use crate::comparator::Comparator;
use crate::error::{CursorResult, TreeError};
use crate::types::{NodeId, TreeMap, NULL_NODE};

/// A removal-capable, bidirectional position in a [`TreeMap`].
///
/// # Examples
///
/// ```
/// use rbtreemap::TreeMap;
///
/// let mut map: TreeMap<i32, &str> = TreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// let mut cursor = map.cursor();
///
/// assert_eq!(cursor.next(&map).unwrap(), (&1, &"a"));
/// assert_eq!(cursor.next(&map).unwrap(), (&2, &"b"));
/// assert_eq!(cursor.remove(&mut map).unwrap(), (2, "b"));
/// assert_eq!(cursor.next(&map).unwrap(), (&3, &"c"));
/// assert!(!cursor.has_next());
///
/// // A change made behind the cursor's back is reported.
/// map.insert(4, "d");
/// assert!(cursor.previous(&map).unwrap_err().is_concurrent_modification());
/// ```
pub struct Cursor<K, V, C> {
    /// Entry `next` returns.
    next: NodeId,
    /// Entry `previous` returns.
    previous: NodeId,
    /// Entry handed out by the last `next`/`previous`, cleared by `remove`.
    last_returned: NodeId,
    expected_modification_count: u64,
    _map: PhantomData<fn() -> TreeMap<K, V, C>>,
}

impl<K, V, C> Clone for Cursor<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            previous: self.previous,
            last_returned: self.last_returned,
            expected_modification_count: self.expected_modification_count,
            _map: PhantomData,
        }
    }
}

impl<K, V, C> std::fmt::Debug for Cursor<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("next", &self.next)
            .field("previous", &self.previous)
            .field("last_returned", &self.last_returned)
            .field("expected_modification_count", &self.expected_modification_count)
            .finish()
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns a cursor positioned before the first entry.
    pub fn cursor(&self) -> Cursor<K, V, C> {
        Cursor::between(self, NULL_NODE, self.first_node())
    }

    /// Returns a cursor positioned after the last entry, ready to walk
    /// backwards.
    pub fn cursor_back(&self) -> Cursor<K, V, C> {
        Cursor::between(self, self.last_node(), NULL_NODE)
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Returns a cursor whose `next` yields the first key `>= key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map: TreeMap<i32, ()> = [10, 20, 30].into_iter().map(|k| (k, ())).collect();
    /// let mut cursor = map.cursor_at(&15);
    /// assert_eq!(cursor.next(&map).unwrap().0, &20);
    /// assert_eq!(cursor.previous(&map).unwrap().0, &20);
    /// assert_eq!(cursor.previous(&map).unwrap().0, &10);
    /// ```
    pub fn cursor_at(&self, key: &K) -> Cursor<K, V, C> {
        let next = self.ceiling_node(key);
        let previous = if next == NULL_NODE {
            self.last_node()
        } else {
            self.predecessor(next)
        };
        Cursor::between(self, previous, next)
    }
}

impl<K, V, C> Cursor<K, V, C> {
    fn between(map: &TreeMap<K, V, C>, previous: NodeId, next: NodeId) -> Self {
        Self {
            next,
            previous,
            last_returned: NULL_NODE,
            expected_modification_count: map.modification_count,
            _map: PhantomData,
        }
    }

    /// True if `next` would return an entry.
    ///
    /// Only looks at the cursor's own position; an outside change is
    /// reported by the next moving operation.
    pub fn has_next(&self) -> bool {
        self.next != NULL_NODE
    }

    /// True if `previous` would return an entry.
    pub fn has_previous(&self) -> bool {
        self.previous != NULL_NODE
    }

    /// Step forward and return the entry passed over.
    ///
    /// # Errors
    ///
    /// - `ConcurrentModification` if the map changed outside this cursor
    /// - `NoSuchElement` if the cursor is already past the last entry
    pub fn next<'m>(&mut self, map: &'m TreeMap<K, V, C>) -> CursorResult<(&'m K, &'m V)> {
        self.check_for_modification(map)?;
        if self.next == NULL_NODE {
            return Err(TreeError::NoSuchElement);
        }

        let current = self.next;
        self.last_returned = current;
        self.previous = current;
        self.next = map.successor(current);
        map.entry_of(current).ok_or(TreeError::NoSuchElement)
    }

    /// Step backward and return the entry passed over.
    ///
    /// # Errors
    ///
    /// - `ConcurrentModification` if the map changed outside this cursor
    /// - `NoSuchElement` if the cursor is already before the first entry
    pub fn previous<'m>(&mut self, map: &'m TreeMap<K, V, C>) -> CursorResult<(&'m K, &'m V)> {
        self.check_for_modification(map)?;
        if self.previous == NULL_NODE {
            return Err(TreeError::NoSuchElement);
        }

        let current = self.previous;
        self.last_returned = current;
        self.next = current;
        self.previous = map.predecessor(current);
        map.entry_of(current).ok_or(TreeError::NoSuchElement)
    }

    /// Key of the entry last returned by `next` or `previous`.
    pub fn key<'m>(&self, map: &'m TreeMap<K, V, C>) -> CursorResult<&'m K> {
        let id = self.last_returned_in(map, "read the key")?;
        map.key_of(id).ok_or(TreeError::NoSuchElement)
    }

    /// Value of the entry last returned by `next` or `previous`.
    pub fn value<'m>(&self, map: &'m TreeMap<K, V, C>) -> CursorResult<&'m V> {
        let id = self.last_returned_in(map, "read the value")?;
        map.entry_of(id)
            .map(|(_, value)| value)
            .ok_or(TreeError::NoSuchElement)
    }

    /// Replace the value of the entry last returned, returning the old one.
    ///
    /// The change is made through the cursor, so the cursor stays valid.
    pub fn set_value(&mut self, map: &mut TreeMap<K, V, C>, value: V) -> CursorResult<V> {
        let id = self.last_returned_in(map, "set the value")?;
        let node = map.arena.get_mut(id).ok_or(TreeError::NoSuchElement)?;
        let old = std::mem::replace(&mut node.value, value);
        map.bump_modification_count();
        self.expected_modification_count = map.modification_count;
        Ok(old)
    }

    /// Remove the entry last returned by `next` or `previous`.
    ///
    /// The cursor is left in the gap the entry occupied, so traversal in
    /// either direction continues with the removed entry's neighbors.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if nothing was returned since the cursor was created,
    ///   reset, or last removed an entry
    /// - `ConcurrentModification` if the map changed outside this cursor;
    ///   the map is not touched in that case
    pub fn remove(&mut self, map: &mut TreeMap<K, V, C>) -> CursorResult<(K, V)> {
        let id = self.last_returned_in(map, "remove")?;

        let previous = map.predecessor(id);
        let (key, value, successor) = map.remove_node(id).ok_or(TreeError::NoSuchElement)?;

        self.previous = previous;
        self.next = successor;
        self.last_returned = NULL_NODE;
        self.expected_modification_count = map.modification_count;
        Ok((key, value))
    }

    /// Move back to before the first entry and resynchronize with the map.
    pub fn reset(&mut self, map: &TreeMap<K, V, C>) {
        *self = Self::between(map, NULL_NODE, map.first_node());
    }

    fn last_returned_in(&self, map: &TreeMap<K, V, C>, operation: &str) -> CursorResult<NodeId> {
        if self.last_returned == NULL_NODE {
            return Err(TreeError::invalid_state(
                operation,
                "before next() or previous(), or twice for the same entry",
            ));
        }
        self.check_for_modification(map)?;
        Ok(self.last_returned)
    }

    fn check_for_modification(&self, map: &TreeMap<K, V, C>) -> CursorResult<()> {
        if map.modification_count != self.expected_modification_count {
            debug!(
                expected = self.expected_modification_count,
                actual = map.modification_count,
                "cursor detected concurrent modification"
            );
            return Err(TreeError::ConcurrentModification {
                expected: self.expected_modification_count,
                actual: map.modification_count,
            });
        }
        Ok(())
    }
}
