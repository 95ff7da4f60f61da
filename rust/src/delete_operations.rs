//! DELETE operations for TreeMap.
//!
//! This module contains key removal, the red-black fixup that runs after a
//! black node leaves the tree, and the bulk removals built on them
//! (`pop_first`, `pop_last`, `retain`, `clear`).

use tracing::trace;

use crate::comparator::Comparator;
use crate::types::{Color, NodeId, TreeMap, NULL_NODE};

impl<K, V, C> TreeMap<K, V, C> {
    /// Remove every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, "a"), (2, "b")]);
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        trace!(entries = self.len, "clearing tree map");
        self.arena.clear();
        self.root = NULL_NODE;
        self.len = 0;
        self.bump_modification_count();
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first_node();
        self.remove_node(first).map(|(key, value, _)| (key, value))
    }

    /// Remove and return the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last_node();
        self.remove_node(last).map(|(key, value, _)| (key, value))
    }

    /// Keep only the entries for which `keep` returns true, visiting them in
    /// key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = (0..8).map(|i| (i, i * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut current = self.first_node();
        while current != NULL_NODE {
            let node = self.node_mut(current);
            if keep(&node.key, &mut node.value) {
                current = self.successor(current);
            } else {
                current = self
                    .remove_node(current)
                    .map_or(NULL_NODE, |(_, _, successor)| successor);
            }
        }
    }

    /// Unlink node `id` and hand back its entry.
    ///
    /// The third element is the id of the node that now holds the removed
    /// entry's in-order successor (`NULL_NODE` if there is none). Callers
    /// walking the tree continue from there: when `id` had two children the
    /// successor's payload is moved into `id`'s slot, so the answer is `id`
    /// itself.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> Option<(K, V, NodeId)> {
        if !self.arena.contains(id) {
            return None;
        }

        let (target, successor) = if self.node(id).has_two_children() {
            let next = self.least_node(self.node(id).right);
            if let Some((here, there)) = self.arena.get2_mut(id, next) {
                std::mem::swap(&mut here.key, &mut there.key);
                std::mem::swap(&mut here.value, &mut there.value);
            }
            (next, id)
        } else {
            (id, self.successor(id))
        };

        // `target` now has at most one child.
        let replacement = match self.node(target).left {
            NULL_NODE => self.node(target).right,
            left => left,
        };
        let parent = self.node(target).parent;
        let removed_color = self.node(target).color;

        if replacement != NULL_NODE {
            self.node_mut(replacement).parent = parent;
            self.replace_child(parent, target, replacement);
            if removed_color == Color::Black {
                self.fix_after_deletion(replacement);
            }
        } else if parent == NULL_NODE {
            self.root = NULL_NODE;
        } else {
            // A black leaf stands in for the missing subtree while the fixup
            // runs, then gets cut loose.
            if removed_color == Color::Black {
                self.fix_after_deletion(target);
            }
            let parent = self.node(target).parent;
            if parent != NULL_NODE {
                self.replace_child(parent, target, NULL_NODE);
            }
        }

        let node = self.arena.deallocate(target)?;
        self.len -= 1;
        self.bump_modification_count();
        Some((node.key, node.value, successor))
    }

    /// Restore the black-height invariant after removing a black node.
    ///
    /// `x` carries an extra black. The loop moves that extra black up the
    /// tree, or absorbs it with a rotation when a sibling has a red child.
    fn fix_after_deletion(&mut self, mut x: NodeId) {
        while x != self.root && self.color_of(x) == Color::Black {
            let parent = self.parent_of(x);
            if x == self.left_of(parent) {
                let mut sibling = self.right_of(parent);

                if self.color_of(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.right_of(self.parent_of(x));
                }

                if self.color_of(self.left_of(sibling)) == Color::Black
                    && self.color_of(self.right_of(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    x = self.parent_of(x);
                } else {
                    if self.color_of(self.right_of(sibling)) == Color::Black {
                        // Near child is red: rotate it to the far side.
                        let near = self.left_of(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right_of(self.parent_of(x));
                    }
                    let parent = self.parent_of(x);
                    self.set_color(sibling, self.color_of(parent));
                    self.set_color(parent, Color::Black);
                    let far = self.right_of(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut sibling = self.left_of(parent);

                if self.color_of(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.left_of(self.parent_of(x));
                }

                if self.color_of(self.right_of(sibling)) == Color::Black
                    && self.color_of(self.left_of(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    x = self.parent_of(x);
                } else {
                    if self.color_of(self.left_of(sibling)) == Color::Black {
                        let near = self.right_of(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left_of(self.parent_of(x));
                    }
                    let parent = self.parent_of(x);
                    self.set_color(sibling, self.color_of(parent));
                    self.set_color(parent, Color::Black);
                    let far = self.left_of(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }

        self.set_color(x, Color::Black);
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Remove a key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove a key from the map, returning the stored key and its value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.find_node(key);
        self.remove_node(id).map(|(key, value, _)| (key, value))
    }
}
