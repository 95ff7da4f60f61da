//! Core types and data structures for TreeMap.
//!
//! This module contains the node layout, the color enum and the map struct
//! itself. Behavior lives in the operation modules.

use crate::arena::Arena;
use crate::comparator::NaturalOrder;

pub use crate::arena::{NodeId, NULL_NODE};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of node slots `TreeMap::new` reserves up front.
pub const DEFAULT_CAPACITY: usize = 0;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// The color of a red-black tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A tree cell: one entry plus its links.
///
/// Links are arena ids; `NULL_NODE` marks a missing child or parent.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
    pub(crate) color: Color,
}

/// An ordered map backed by a red-black tree.
///
/// Keys are kept in the order defined by the comparator `C` (by default the
/// key type's `Ord`). The tree is height-balanced, so point operations are
/// O(log n) in the worst case.
///
/// # Type Parameters
///
/// * `K` - Key type
/// * `V` - Value type
/// * `C` - Comparator; [`NaturalOrder`] unless given explicitly
///
/// # Examples
///
/// ```
/// use rbtreemap::TreeMap;
///
/// let mut map = TreeMap::new();
/// map.insert(5, "five");
/// map.insert(3, "three");
/// map.insert(8, "eight");
///
/// assert_eq!(map.get(&3), Some(&"three"));
/// assert_eq!(map.first_key(), Some(&3));
/// assert_eq!(map.next_key(&5), Some(&8));
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [3, 5, 8]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Successor / predecessor**: O(log n) worst case, O(1) amortized
/// - **Iteration**: O(n)
pub struct TreeMap<K, V, C = NaturalOrder> {
    /// Owner of every node.
    pub(crate) arena: Arena<Node<K, V>>,
    pub(crate) root: NodeId,
    pub(crate) len: usize,
    /// Bumped by every structural or value change.
    pub(crate) modification_count: u64,
    pub(crate) comparator: C,
}
