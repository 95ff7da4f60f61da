//! Rotation primitives for TreeMap.
//!
//! A rotation changes which node is the local subtree root while keeping the
//! in-order sequence intact. Both run in O(1) and rewrite at most three
//! parent/child link pairs.

use crate::types::{NodeId, TreeMap, NULL_NODE};

impl<K, V, C> TreeMap<K, V, C> {
    /// Rotate left around `pivot`; its right child takes its place.
    ///
    /// ```text
    ///     p                r
    ///    / \              / \
    ///   a   r     =>     p   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    pub(crate) fn rotate_left(&mut self, pivot: NodeId) {
        let right = self.right_of(pivot);
        if right == NULL_NODE {
            return;
        }

        let inner = self.node(right).left;
        self.node_mut(pivot).right = inner;
        if inner != NULL_NODE {
            self.node_mut(inner).parent = pivot;
        }

        let parent = self.node(pivot).parent;
        self.node_mut(right).parent = parent;
        self.replace_child(parent, pivot, right);

        self.node_mut(right).left = pivot;
        self.node_mut(pivot).parent = right;
    }

    /// Rotate right around `pivot`; mirror of [`rotate_left`](Self::rotate_left).
    pub(crate) fn rotate_right(&mut self, pivot: NodeId) {
        let left = self.left_of(pivot);
        if left == NULL_NODE {
            return;
        }

        let inner = self.node(left).right;
        self.node_mut(pivot).left = inner;
        if inner != NULL_NODE {
            self.node_mut(inner).parent = pivot;
        }

        let parent = self.node(pivot).parent;
        self.node_mut(left).parent = parent;
        self.replace_child(parent, pivot, left);

        self.node_mut(left).right = pivot;
        self.node_mut(pivot).parent = left;
    }
}
