//! Range query operations for TreeMap.
//!
//! A range view is a window onto the keys of a map that fall between two
//! bounds. Views borrow the map rather than copying it: reads go straight to
//! the tree and writes through a [`RangeViewMut`] land in the backing map.
//! Every key argument is checked against the bounds before the tree is
//! touched.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

use tracing::debug;

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::{ModifyResult, TreeError, TreeResult};
use crate::iteration::RangeIter;
use crate::types::{NodeId, TreeMap, NULL_NODE};

// ============================================================================
// KEY RANGE
// ============================================================================

/// A pair of bounds over keys, each inclusive, exclusive or open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange<K> {
    lower: Bound<K>,
    upper: Bound<K>,
}

fn bound_key<K>(bound: &Bound<K>) -> Option<&K> {
    match bound {
        Bound::Included(key) | Bound::Excluded(key) => Some(key),
        Bound::Unbounded => None,
    }
}

/// Picks whichever of two bounds admits fewer keys. `inward` is the ordering
/// a bound key has relative to the other when it is the tighter one.
fn tighter<K: Clone, C: Comparator<K>>(
    a: &Bound<K>,
    b: &Bound<K>,
    comparator: &C,
    inward: Ordering,
) -> Bound<K> {
    match (bound_key(a), bound_key(b)) {
        (None, _) => b.clone(),
        (_, None) => a.clone(),
        (Some(x), Some(y)) => match comparator.compare(x, y) {
            Ordering::Equal if matches!(a, Bound::Excluded(_)) => a.clone(),
            Ordering::Equal => b.clone(),
            order if order == inward => a.clone(),
            _ => b.clone(),
        },
    }
}

impl<K> KeyRange<K> {
    /// A range admitting every key.
    pub fn unbounded() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    /// Creates a range from explicit bounds.
    pub fn new(lower: Bound<K>, upper: Bound<K>) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> Bound<&K> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Bound<&K> {
        self.upper.as_ref()
    }

    /// Reject a lower bound above the upper one, or equal bounds that are
    /// both excluded.
    pub(crate) fn check<C: Comparator<K>>(&self, comparator: &C) -> TreeResult<()> {
        let (Some(lo), Some(hi)) = (bound_key(&self.lower), bound_key(&self.upper)) else {
            return Ok(());
        };
        let reason = match comparator.compare(lo, hi) {
            Ordering::Greater => "lower bound is greater than upper bound",
            Ordering::Equal
                if matches!(
                    (&self.lower, &self.upper),
                    (Bound::Excluded(_), Bound::Excluded(_))
                ) =>
            {
                "bounds are equal and both excluded"
            }
            _ => return Ok(()),
        };
        debug!(reason, "rejected inverted range");
        Err(TreeError::invalid_range(reason))
    }

    pub(crate) fn too_low<C: Comparator<K>>(&self, key: &K, comparator: &C) -> bool {
        match &self.lower {
            Bound::Included(lo) => comparator.compare(key, lo) == Ordering::Less,
            Bound::Excluded(lo) => comparator.compare(key, lo) != Ordering::Greater,
            Bound::Unbounded => false,
        }
    }

    pub(crate) fn too_high<C: Comparator<K>>(&self, key: &K, comparator: &C) -> bool {
        match &self.upper {
            Bound::Included(hi) => comparator.compare(key, hi) == Ordering::Greater,
            Bound::Excluded(hi) => comparator.compare(key, hi) != Ordering::Less,
            Bound::Unbounded => false,
        }
    }

    pub(crate) fn contains<C: Comparator<K>>(&self, key: &K, comparator: &C) -> bool {
        !self.too_low(key, comparator) && !self.too_high(key, comparator)
    }

    /// Smallest in-range node of `map`, or null.
    pub(crate) fn first_node<V, C: Comparator<K>>(&self, map: &TreeMap<K, V, C>) -> NodeId {
        let id = match &self.lower {
            Bound::Included(lo) => map.ceiling_node(lo),
            Bound::Excluded(lo) => map.higher_node(lo),
            Bound::Unbounded => map.first_node(),
        };
        self.keep_if_below_upper(map, id)
    }

    /// Largest in-range node of `map`, or null.
    pub(crate) fn last_node<V, C: Comparator<K>>(&self, map: &TreeMap<K, V, C>) -> NodeId {
        let id = match &self.upper {
            Bound::Included(hi) => map.floor_node(hi),
            Bound::Excluded(hi) => map.lower_node(hi),
            Bound::Unbounded => map.last_node(),
        };
        self.keep_if_above_lower(map, id)
    }

    /// Least in-range node with a key strictly greater than `key`.
    pub(crate) fn higher_node<V, C: Comparator<K>>(
        &self,
        map: &TreeMap<K, V, C>,
        key: &K,
    ) -> NodeId {
        if self.too_low(key, &map.comparator) {
            return self.first_node(map);
        }
        self.keep_if_below_upper(map, map.higher_node(key))
    }

    /// Greatest in-range node with a key strictly less than `key`.
    pub(crate) fn lower_node<V, C: Comparator<K>>(
        &self,
        map: &TreeMap<K, V, C>,
        key: &K,
    ) -> NodeId {
        if self.too_high(key, &map.comparator) {
            return self.last_node(map);
        }
        self.keep_if_above_lower(map, map.lower_node(key))
    }

    fn keep_if_below_upper<V, C: Comparator<K>>(&self, map: &TreeMap<K, V, C>, id: NodeId) -> NodeId {
        match map.key_of(id) {
            Some(key) if !self.too_high(key, &map.comparator) => id,
            _ => NULL_NODE,
        }
    }

    fn keep_if_above_lower<V, C: Comparator<K>>(&self, map: &TreeMap<K, V, C>, id: NodeId) -> NodeId {
        match map.key_of(id) {
            Some(key) if !self.too_low(key, &map.comparator) => id,
            _ => NULL_NODE,
        }
    }
}

impl<K: Clone> KeyRange<K> {
    /// Copies the bounds out of any `RangeBounds`.
    pub fn from_bounds<R: RangeBounds<K> + ?Sized>(bounds: &R) -> Self {
        Self {
            lower: bounds.start_bound().cloned(),
            upper: bounds.end_bound().cloned(),
        }
    }

    /// The keys admitted by both ranges.
    pub(crate) fn intersect<C: Comparator<K>>(&self, other: &Self, comparator: &C) -> Self {
        Self {
            lower: tighter(&self.lower, &other.lower, comparator, Ordering::Greater),
            upper: tighter(&self.upper, &other.upper, comparator, Ordering::Less),
        }
    }
}

impl<K> RangeBounds<K> for KeyRange<K> {
    fn start_bound(&self) -> Bound<&K> {
        self.lower.as_ref()
    }

    fn end_bound(&self) -> Bound<&K> {
        self.upper.as_ref()
    }
}

// ============================================================================
// VIEW STRUCTS
// ============================================================================

/// Read-only view of the entries of a map whose keys lie in a range.
pub struct RangeView<'a, K, V, C = NaturalOrder> {
    map: &'a TreeMap<K, V, C>,
    range: KeyRange<K>,
}

/// Mutable view of the entries of a map whose keys lie in a range.
///
/// Inserts and removals with keys outside the range fail with
/// [`TreeError::KeyOutOfRange`] and leave the map untouched.
pub struct RangeViewMut<'a, K, V, C = NaturalOrder> {
    map: &'a mut TreeMap<K, V, C>,
    range: KeyRange<K>,
}

// ============================================================================
// TREEMAP RANGE CONSTRUCTORS
// ============================================================================

impl<K: Clone, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Returns a read-only view of the entries whose keys fall in `bounds`.
    ///
    /// Any `RangeBounds` works: `a..b`, `a..=b`, `a..`, `..b`, `..` or an
    /// explicit `(Bound, Bound)` pair for an excluded lower bound.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRange`] if the lower bound is above the upper
    /// bound, or both are the same key and both excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = (0..10).map(|i| (i, format!("value{}", i))).collect();
    ///
    /// let view = map.range(3..7).unwrap();
    /// assert_eq!(view.keys().copied().collect::<Vec<_>>(), [3, 4, 5, 6]);
    /// assert_eq!(view.first_key(), Some(&3));
    /// assert_eq!(view.get(&8), None);
    ///
    /// assert_eq!(map.range(5..).unwrap().len(), 5);
    /// assert!(map.range(7..3).is_err());
    /// ```
    pub fn range<R: RangeBounds<K>>(&self, bounds: R) -> TreeResult<RangeView<'_, K, V, C>> {
        let range = KeyRange::from_bounds(&bounds);
        range.check(&self.comparator)?;
        Ok(RangeView { map: self, range })
    }

    /// Returns a mutable view of the entries whose keys fall in `bounds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::{TreeError, TreeMap};
    ///
    /// let mut map: TreeMap<i32, &str> = TreeMap::new();
    /// let mut view = map.range_mut(10..20).unwrap();
    /// assert_eq!(view.insert(15, "in"), Ok(None));
    /// assert_eq!(view.insert(25, "out"), Err(TreeError::KeyOutOfRange));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn range_mut<R: RangeBounds<K>>(
        &mut self,
        bounds: R,
    ) -> TreeResult<RangeViewMut<'_, K, V, C>> {
        let range = KeyRange::from_bounds(&bounds);
        range.check(&self.comparator)?;
        Ok(RangeViewMut { map: self, range })
    }
}

// ============================================================================
// SHARED READ OPERATIONS
// ============================================================================

/// Read operations common to both views. `$lt` is the lifetime of the
/// returned borrows: the map's for the shared view, the view's own for the
/// mutable one.
macro_rules! range_view_reads {
    ($lt:lifetime) => {
        /// The bounds of this view.
        pub fn key_range(&self) -> &KeyRange<K> {
            &self.range
        }

        /// True if `key` lies within the bounds, whether or not it is present.
        pub fn contains_range_key(&self, key: &K) -> bool {
            self.range.contains(key, &self.backing().comparator)
        }

        /// Smallest key in the view, `None` when no key of the map is in range.
        pub fn first_key(&self) -> Option<&$lt K> {
            let map = self.backing();
            map.key_of(self.range.first_node(map))
        }

        /// Largest key in the view, `None` when no key of the map is in range.
        pub fn last_key(&self) -> Option<&$lt K> {
            let map = self.backing();
            map.key_of(self.range.last_node(map))
        }

        /// Entry with the smallest key in the view.
        pub fn first_key_value(&self) -> Option<(&$lt K, &$lt V)> {
            let map = self.backing();
            map.entry_of(self.range.first_node(map))
        }

        /// Entry with the largest key in the view.
        pub fn last_key_value(&self) -> Option<(&$lt K, &$lt V)> {
            let map = self.backing();
            map.entry_of(self.range.last_node(map))
        }

        /// Value for `key`; `None` if it is absent or outside the view.
        pub fn get(&self, key: &K) -> Option<&$lt V> {
            if !self.contains_range_key(key) {
                return None;
            }
            self.backing().get(key)
        }

        /// True if `key` is present in the map and inside the view.
        pub fn contains_key(&self, key: &K) -> bool {
            self.get(key).is_some()
        }

        /// The next key in the view after `key`. A key below the range gives
        /// the first key of the view.
        pub fn next_key(&self, key: &K) -> Option<&$lt K> {
            let map = self.backing();
            map.key_of(self.range.higher_node(map, key))
        }

        /// The key in the view before `key`. A key above the range gives the
        /// last key of the view.
        pub fn previous_key(&self, key: &K) -> Option<&$lt K> {
            let map = self.backing();
            map.key_of(self.range.lower_node(map, key))
        }

        /// Number of entries in the view. Walks the range.
        pub fn len(&self) -> usize {
            self.iter().count()
        }

        pub fn is_empty(&self) -> bool {
            self.range.first_node(self.backing()) == NULL_NODE
        }

        /// Entries of the view in key order.
        pub fn iter(&self) -> RangeIter<$lt, K, V, C> {
            let map = self.backing();
            map.range_iter(self.range.first_node(map), self.range.last_node(map))
        }

        /// Keys of the view in order.
        pub fn keys(&self) -> impl DoubleEndedIterator<Item = &$lt K> + $lt {
            self.iter().map(|(key, _)| key)
        }

        /// Values of the view in key order.
        pub fn values(&self) -> impl DoubleEndedIterator<Item = &$lt V> + $lt {
            self.iter().map(|(_, value)| value)
        }
    };
}

impl<'a, K, V, C: Comparator<K>> RangeView<'a, K, V, C> {
    fn backing(&self) -> &'a TreeMap<K, V, C> {
        self.map
    }

    range_view_reads!('a);
}

impl<'a, K, V, C: Comparator<K>> RangeViewMut<'a, K, V, C> {
    fn backing(&self) -> &TreeMap<K, V, C> {
        &*self.map
    }

    range_view_reads!('_);

    fn admit(&self, key: &K) -> ModifyResult<()> {
        if self.range.contains(key, &self.map.comparator) {
            Ok(())
        } else {
            debug!("range view rejected a key outside its bounds");
            Err(TreeError::KeyOutOfRange)
        }
    }

    /// Insert into the backing map.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyOutOfRange`] if `key` lies outside the view; the map
    /// is left unchanged.
    pub fn insert(&mut self, key: K, value: V) -> ModifyResult<Option<V>> {
        self.admit(&key)?;
        Ok(self.map.insert(key, value))
    }

    /// Remove from the backing map.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyOutOfRange`] if `key` lies outside the view.
    pub fn remove(&mut self, key: &K) -> ModifyResult<Option<V>> {
        self.admit(key)?;
        Ok(self.map.remove(key))
    }

    /// Mutable access to the value for an in-range key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        if !self.contains_range_key(key) {
            return None;
        }
        self.map.get_mut(key)
    }

    /// Remove and return the entry with the smallest key in the view.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let id = self.range.first_node(&*self.map);
        self.map.remove_node(id).map(|(key, value, _)| (key, value))
    }

    /// Remove and return the entry with the largest key in the view.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let id = self.range.last_node(&*self.map);
        self.map.remove_node(id).map(|(key, value, _)| (key, value))
    }

    /// Remove every entry of the view from the backing map.
    pub fn clear(&mut self) {
        let mut current = self.range.first_node(&*self.map);
        while let Some(key) = self.map.key_of(current) {
            if self.range.too_high(key, &self.map.comparator) {
                break;
            }
            current = self
                .map
                .remove_node(current)
                .map_or(NULL_NODE, |(_, _, successor)| successor);
        }
    }
}

// ============================================================================
// SUB-RANGES
// ============================================================================

impl<'a, K: Clone, V, C: Comparator<K>> RangeView<'a, K, V, C> {
    /// A view of the keys in both this view and `bounds`.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRange`] if the two ranges do not overlap or
    /// `bounds` is itself inverted.
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map: TreeMap<i32, ()> = (0..20).map(|i| (i, ())).collect();
    /// let view = map.range(5..15).unwrap();
    /// let inner = view.sub_range(10..).unwrap();
    /// assert_eq!(inner.keys().copied().collect::<Vec<_>>(), [10, 11, 12, 13, 14]);
    /// assert!(view.sub_range(..3).is_err());
    /// ```
    pub fn sub_range<R: RangeBounds<K>>(&self, bounds: R) -> TreeResult<RangeView<'a, K, V, C>> {
        let range = narrow(&self.range, &bounds, &self.map.comparator)?;
        Ok(RangeView {
            map: self.map,
            range,
        })
    }
}

impl<'a, K: Clone, V, C: Comparator<K>> RangeViewMut<'a, K, V, C> {
    /// A read-only view with the same bounds.
    pub fn as_view(&self) -> RangeView<'_, K, V, C> {
        RangeView {
            map: &*self.map,
            range: self.range.clone(),
        }
    }

    /// A read-only view of the keys in both this view and `bounds`.
    pub fn sub_range<R: RangeBounds<K>>(&self, bounds: R) -> TreeResult<RangeView<'_, K, V, C>> {
        let range = narrow(&self.range, &bounds, &self.map.comparator)?;
        Ok(RangeView {
            map: &*self.map,
            range,
        })
    }

    /// A mutable view of the keys in both this view and `bounds`.
    pub fn sub_range_mut<R: RangeBounds<K>>(
        &mut self,
        bounds: R,
    ) -> TreeResult<RangeViewMut<'_, K, V, C>> {
        let range = narrow(&self.range, &bounds, &self.map.comparator)?;
        Ok(RangeViewMut {
            map: &mut *self.map,
            range,
        })
    }
}

fn narrow<K: Clone, C: Comparator<K>, R: RangeBounds<K>>(
    current: &KeyRange<K>,
    bounds: &R,
    comparator: &C,
) -> TreeResult<KeyRange<K>> {
    let requested = KeyRange::from_bounds(bounds);
    requested.check(comparator)?;
    let range = current.intersect(&requested, comparator);
    range.check(comparator)?;
    if let (Bound::Included(lo), Bound::Excluded(hi)) | (Bound::Excluded(lo), Bound::Included(hi)) =
        (&range.lower, &range.upper)
    {
        if comparator.compare(lo, hi) == Ordering::Equal {
            debug!("rejected sub-range with no overlap");
            return Err(TreeError::invalid_range("ranges do not overlap"));
        }
    }
    Ok(range)
}
