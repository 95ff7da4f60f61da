//! Navigation primitives for TreeMap.
//!
//! In-order walking (least/greatest in a subtree, successor, predecessor) and
//! the four bound searches (ceiling, floor, higher, lower). Ordered iteration,
//! the cursor, range views and the two-child removal case are all built on
//! these.

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::types::{NodeId, TreeMap, NULL_NODE};

// ============================================================================
// STRUCTURAL WALKS
// ============================================================================

impl<K, V, C> TreeMap<K, V, C> {
    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn least_node(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.node(id).left != NULL_NODE {
            id = self.node(id).left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn greatest_node(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.node(id).right != NULL_NODE {
            id = self.node(id).right;
        }
        id
    }

    pub(crate) fn first_node(&self) -> NodeId {
        self.least_node(self.root)
    }

    pub(crate) fn last_node(&self) -> NodeId {
        self.greatest_node(self.root)
    }

    /// In-order successor of `id`, or `NULL_NODE` if `id` holds the maximum.
    pub(crate) fn successor(&self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        let right = self.node(id).right;
        if right != NULL_NODE {
            return self.least_node(right);
        }

        // Climb while we are a right child; the first left-child step lands
        // on the successor.
        let mut child = id;
        let mut parent = self.node(id).parent;
        while parent != NULL_NODE && self.node(parent).right == child {
            child = parent;
            parent = self.node(parent).parent;
        }
        parent
    }

    /// In-order predecessor of `id`, or `NULL_NODE` if `id` holds the minimum.
    pub(crate) fn predecessor(&self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        let left = self.node(id).left;
        if left != NULL_NODE {
            return self.greatest_node(left);
        }

        let mut child = id;
        let mut parent = self.node(id).parent;
        while parent != NULL_NODE && self.node(parent).left == child {
            child = parent;
            parent = self.node(parent).parent;
        }
        parent
    }
}

// ============================================================================
// KEYED SEARCHES
// ============================================================================

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Node holding a key equal to `key`.
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NULL_NODE {
            let node = self.node(current);
            current = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return current,
            };
        }
        NULL_NODE
    }

    /// Least node with a key `>= key`.
    pub(crate) fn ceiling_node(&self, key: &K) -> NodeId {
        self.bound_search(key, true, true)
    }

    /// Least node with a key `> key`.
    pub(crate) fn higher_node(&self, key: &K) -> NodeId {
        self.bound_search(key, true, false)
    }

    /// Greatest node with a key `<= key`.
    pub(crate) fn floor_node(&self, key: &K) -> NodeId {
        self.bound_search(key, false, true)
    }

    /// Greatest node with a key `< key`.
    pub(crate) fn lower_node(&self, key: &K) -> NodeId {
        self.bound_search(key, false, false)
    }

    /// Single descent that remembers the best candidate seen so far.
    ///
    /// `upward` searches for keys after `key`, otherwise before it.
    /// `inclusive` lets an equal key satisfy the search.
    fn bound_search(&self, key: &K, upward: bool, inclusive: bool) -> NodeId {
        let mut best = NULL_NODE;
        let mut current = self.root;
        while current != NULL_NODE {
            let node = self.node(current);
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal if inclusive => return current,
                Ordering::Less => {
                    if upward {
                        best = current;
                    }
                    current = node.left;
                }
                Ordering::Greater => {
                    if !upward {
                        best = current;
                    }
                    current = node.right;
                }
                Ordering::Equal => {
                    current = if upward { node.right } else { node.left };
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use crate::types::NULL_NODE;
    use crate::TreeMap;

    fn sample() -> TreeMap<i32, i32> {
        [5, 3, 8, 1, 4, 7, 9].into_iter().map(|k| (k, k * 10)).collect()
    }

    fn key(map: &TreeMap<i32, i32>, id: u32) -> Option<i32> {
        map.key_of(id).copied()
    }

    #[test]
    fn test_successor_and_predecessor_walk_in_order() {
        let map = sample();
        let mut forward = Vec::new();
        let mut id = map.first_node();
        while id != NULL_NODE {
            forward.push(key(&map, id).unwrap());
            id = map.successor(id);
        }
        assert_eq!(forward, [1, 3, 4, 5, 7, 8, 9]);

        let mut backward = Vec::new();
        let mut id = map.last_node();
        while id != NULL_NODE {
            backward.push(key(&map, id).unwrap());
            id = map.predecessor(id);
        }
        assert_eq!(backward, [9, 8, 7, 5, 4, 3, 1]);
    }

    #[test]
    fn test_bound_searches() {
        let map = sample();
        assert_eq!(key(&map, map.ceiling_node(&6)), Some(7));
        assert_eq!(key(&map, map.ceiling_node(&7)), Some(7));
        assert_eq!(key(&map, map.higher_node(&7)), Some(8));
        assert_eq!(key(&map, map.floor_node(&6)), Some(5));
        assert_eq!(key(&map, map.floor_node(&5)), Some(5));
        assert_eq!(key(&map, map.lower_node(&5)), Some(4));
        assert_eq!(map.higher_node(&9), NULL_NODE);
        assert_eq!(map.lower_node(&1), NULL_NODE);
        assert_eq!(key(&map, map.lower_node(&100)), Some(9));
        assert_eq!(key(&map, map.higher_node(&-100)), Some(1));
    }

    #[test]
    fn test_navigation_on_empty_map() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        assert_eq!(map.first_node(), NULL_NODE);
        assert_eq!(map.last_node(), NULL_NODE);
        assert_eq!(map.successor(NULL_NODE), NULL_NODE);
        assert_eq!(map.ceiling_node(&1), NULL_NODE);
        assert_eq!(map.find_node(&1), NULL_NODE);
    }
}
