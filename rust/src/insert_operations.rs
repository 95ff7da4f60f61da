//! INSERT operations for TreeMap.
//!
//! This module contains key-value insertion and the red-black fixup that runs
//! after a new node is linked in.

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::types::{Color, Node, NodeId, TreeMap, NULL_NODE};

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Insert a key-value pair into the map.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value returned; the stored key and the tree shape are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_node(key, value).1
    }

    /// Insert and report the id of the node now holding `key`.
    pub(crate) fn insert_node(&mut self, key: K, value: V) -> (NodeId, Option<V>) {
        let mut parent = NULL_NODE;
        let mut went_left = false;
        let mut current = self.root;

        while current != NULL_NODE {
            parent = current;
            let node = self.node(current);
            match self.comparator.compare(&key, &node.key) {
                Ordering::Less => {
                    went_left = true;
                    current = node.left;
                }
                Ordering::Greater => {
                    went_left = false;
                    current = node.right;
                }
                Ordering::Equal => {
                    let old = std::mem::replace(&mut self.node_mut(current).value, value);
                    self.bump_modification_count();
                    return (current, Some(old));
                }
            }
        }

        let id = self.arena.allocate(Node::new_red(key, value, parent));
        if parent == NULL_NODE {
            self.root = id;
        } else if went_left {
            self.node_mut(parent).left = id;
        } else {
            self.node_mut(parent).right = id;
        }

        self.len += 1;
        self.bump_modification_count();
        self.fix_after_insertion(id);
        (id, None)
    }

    /// Restore the red-black invariants after linking the red node `x`.
    ///
    /// The only possible violation is a red `x` under a red parent. Each pass
    /// either pushes that violation two levels up (red uncle) or removes it
    /// with at most two rotations (black uncle).
    fn fix_after_insertion(&mut self, mut x: NodeId) {
        while x != self.root && self.color_of(self.parent_of(x)) == Color::Red {
            let parent = self.parent_of(x);
            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.parent_of(parent);

            if parent == self.left_of(grandparent) {
                let uncle = self.right_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    x = grandparent;
                } else {
                    if x == self.right_of(parent) {
                        // Inner grandchild: turn it into the outer case.
                        x = parent;
                        self.rotate_left(x);
                    }
                    let parent = self.parent_of(x);
                    let grandparent = self.parent_of(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    x = grandparent;
                } else {
                    if x == self.left_of(parent) {
                        x = parent;
                        self.rotate_right(x);
                    }
                    let parent = self.parent_of(x);
                    let grandparent = self.parent_of(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Color;
    use crate::TreeMap;

    #[test]
    fn test_single_insert_makes_black_root() {
        let mut map = TreeMap::new();
        map.insert(1, ());
        assert_eq!(map.color_of(map.root), Color::Black);
        assert_eq!(map.len(), 1);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut map = TreeMap::new();
        for i in 0..1024 {
            map.insert(i, i);
            assert!(map.validate().is_ok(), "invalid after inserting {}", i);
        }
        // A red-black tree with n nodes has height at most 2*log2(n+1).
        assert!(map.height() <= 20);
    }

    #[test]
    fn test_descending_and_zigzag_inserts() {
        let mut map = TreeMap::new();
        for i in (0..200).rev() {
            map.insert(i, ());
        }
        for i in 0..200 {
            map.insert(1000 + if i % 2 == 0 { i } else { 400 - i }, ());
        }
        assert!(map.validate().is_ok());
        assert_eq!(map.len(), 400);
    }

    #[test]
    fn test_update_keeps_shape_and_bumps_count() {
        let mut map = TreeMap::new();
        for i in 0..10 {
            map.insert(i, i);
        }
        let root = map.root;
        let count = map.modification_count();

        assert_eq!(map.insert(4, 40), Some(4));
        assert_eq!(map.root, root);
        assert_eq!(map.len(), 10);
        assert_eq!(map.modification_count(), count + 1);
        assert_eq!(map.get(&4), Some(&40));
    }
}
