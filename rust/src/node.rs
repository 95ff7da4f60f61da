//! Node-level helpers for TreeMap.
//!
//! The red-black algorithms read like their textbook form when every link
//! access tolerates a null id: the color of a missing node is black and the
//! parent or child of a missing node is missing. The accessors below give the
//! rotation, fixup and navigation code exactly that.

use crate::types::{Color, Node, NodeId, TreeMap, NULL_NODE};

// ============================================================================
// NODE IMPLEMENTATION
// ============================================================================

impl<K, V> Node<K, V> {
    /// Creates a detached red node, ready to be linked under `parent`.
    pub(crate) fn new_red(key: K, value: V, parent: NodeId) -> Self {
        Self {
            key,
            value,
            left: NULL_NODE,
            right: NULL_NODE,
            parent,
            color: Color::Red,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub(crate) fn has_two_children(&self) -> bool {
        self.left != NULL_NODE && self.right != NULL_NODE
    }
}

// ============================================================================
// NULL-TOLERANT LINK ACCESS
// ============================================================================

impl<K, V, C> TreeMap<K, V, C> {
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.arena[id]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.arena[id]
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).map_or(NULL_NODE, |node| node.parent)
    }

    #[inline]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).map_or(NULL_NODE, |node| node.left)
    }

    #[inline]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).map_or(NULL_NODE, |node| node.right)
    }

    /// Null nodes count as black.
    #[inline]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        self.arena.get(id).map_or(Color::Black, |node| node.color)
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.arena.get_mut(id) {
            node.color = color;
        }
    }

    /// Key of a live node, or `None` for the null id.
    #[inline]
    pub(crate) fn key_of(&self, id: NodeId) -> Option<&K> {
        self.arena.get(id).map(|node| &node.key)
    }

    /// Entry of a live node, or `None` for the null id.
    #[inline]
    pub(crate) fn entry_of(&self, id: NodeId) -> Option<(&K, &V)> {
        self.arena.get(id).map(|node| (&node.key, &node.value))
    }

    /// Replace `old` with `new` in `old`'s parent (or as the root).
    /// Only the downward link is rewritten; `new.parent` is the caller's job.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NULL_NODE {
            self.root = new;
        } else if self.node(parent).left == old {
            self.node_mut(parent).left = new;
        } else {
            self.node_mut(parent).right = new;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_links_read_as_black_and_missing() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        assert_eq!(map.color_of(NULL_NODE), Color::Black);
        assert_eq!(map.parent_of(NULL_NODE), NULL_NODE);
        assert_eq!(map.left_of(NULL_NODE), NULL_NODE);
        assert_eq!(map.right_of(NULL_NODE), NULL_NODE);
        assert!(map.key_of(NULL_NODE).is_none());
    }

    #[test]
    fn test_new_red_node_is_detached() {
        let node = Node::new_red(1, "one", NULL_NODE);
        assert!(node.is_red());
        assert!(!node.has_two_children());
        assert_eq!(node.key, 1);
        assert_eq!(node.value, "one");
        assert_eq!(node.parent, NULL_NODE);
    }
}
