//! Validation and debugging utilities for TreeMap.
//!
//! This module contains the invariant checks used by tests and by callers who
//! want to audit a map, plus a few structural measurements and a textual dump
//! of the tree.

use std::cmp::Ordering;
use std::fmt::{Debug, Write};

use tracing::warn;

use crate::comparator::Comparator;
use crate::error::{TreeError, TreeResult};
use crate::types::{Color, NodeId, TreeMap, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Check every red-black and bookkeeping invariant.
    ///
    /// Verified in order: parent links agree with child links, the root is
    /// black, keys are strictly ordered under the comparator, no red node has
    /// a red child, every root-to-null path has the same number of black
    /// nodes, and `len()` matches both the reachable node count and the
    /// number of live arena slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = (0..100).map(|i| (i, i)).collect();
    /// assert!(map.validate().is_ok());
    /// ```
    pub fn validate(&self) -> TreeResult<()> {
        let result = self.check_structure();
        if let Err(err) = &result {
            warn!(error = %err, entries = self.len, "tree map failed validation");
        }
        result
    }

    /// Check if the tree maintains all invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_structure().is_ok()
    }

    fn check_structure(&self) -> TreeResult<()> {
        self.check_links()?;

        if self.color_of(self.root) == Color::Red {
            return Err(TreeError::corrupted_tree("root", "root is red"));
        }

        let (count, _) = self.check_subtree(self.root, None, None)?;
        if count != self.len {
            return Err(TreeError::corrupted_tree(
                "size",
                &format!("{} reachable vs len {}", count, self.len),
            ));
        }
        if self.arena.len() != self.len {
            return Err(TreeError::corrupted_tree(
                "arena",
                &format!("{} live slots vs len {}", self.arena.len(), self.len),
            ));
        }
        Ok(())
    }

    /// Returns (node count, black height) of the subtree at `id`, whose keys
    /// must lie strictly between `lower` and `upper`.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> TreeResult<(usize, usize)> {
        if id == NULL_NODE {
            return Ok((0, 1));
        }
        let node = self
            .arena
            .get(id)
            .ok_or_else(|| TreeError::corrupted_tree("node", &format!("dangling id {}", id)))?;

        let above_lower =
            lower.map_or(true, |lo| self.comparator.compare(&node.key, lo) == Ordering::Greater);
        let below_upper =
            upper.map_or(true, |hi| self.comparator.compare(&node.key, hi) == Ordering::Less);
        if !above_lower || !below_upper {
            return Err(TreeError::corrupted_tree(
                "order",
                &format!("key at node {} is outside its subtree bounds", id),
            ));
        }

        if node.is_red()
            && (self.color_of(node.left) == Color::Red || self.color_of(node.right) == Color::Red)
        {
            return Err(TreeError::corrupted_tree(
                "color",
                &format!("red node {} has a red child", id),
            ));
        }

        let (left_count, left_black) = self.check_subtree(node.left, lower, Some(&node.key))?;
        let (right_count, right_black) = self.check_subtree(node.right, Some(&node.key), upper)?;
        if left_black != right_black {
            return Err(TreeError::corrupted_tree(
                "black height",
                &format!(
                    "node {}: {} on the left vs {} on the right",
                    id, left_black, right_black
                ),
            ));
        }

        let own = usize::from(!node.is_red());
        Ok((left_count + right_count + 1, left_black + own))
    }
}

// ============================================================================
// STRUCTURAL CHECKS AND MEASUREMENTS
// ============================================================================

impl<K, V, C> TreeMap<K, V, C> {
    /// Check that every child points back at its parent and that the walk
    /// from the root visits each live node once.
    pub(crate) fn check_links(&self) -> TreeResult<()> {
        if self.root == NULL_NODE {
            return Ok(());
        }
        if self.parent_of(self.root) != NULL_NODE {
            return Err(TreeError::corrupted_tree("root", "root has a parent"));
        }

        let mut visited = 0usize;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            visited += 1;
            if visited > self.arena.len() {
                return Err(TreeError::corrupted_tree("links", "cycle in child links"));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| TreeError::corrupted_tree("links", &format!("dangling id {}", id)))?;
            for child in [node.left, node.right] {
                if child == NULL_NODE {
                    continue;
                }
                if self.parent_of(child) != id {
                    return Err(TreeError::corrupted_tree(
                        "links",
                        &format!("node {} does not point back at parent {}", child, id),
                    ));
                }
                stack.push(child);
            }
        }
        Ok(())
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, id: NodeId) -> usize {
        if id == NULL_NODE {
            return 0;
        }
        let node = self.node(id);
        1 + self
            .subtree_height(node.left)
            .max(self.subtree_height(node.right))
    }

    /// Number of black nodes on the leftmost root-to-leaf path. In a valid
    /// tree every such path has the same count.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut id = self.root;
        while id != NULL_NODE {
            if self.color_of(id) == Color::Black {
                count += 1;
            }
            id = self.left_of(id);
        }
        count
    }

    /// Arena occupancy for this map.
    pub fn arena_stats(&self) -> crate::arena::ArenaStats {
        self.arena.stats()
    }
}

// ============================================================================
// DEBUGGING UTILITIES
// ============================================================================

impl<K: Debug, V, C> TreeMap<K, V, C> {
    /// Render the tree sideways, one node per line, indented by depth.
    ///
    /// ```
    /// use rbtreemap::TreeMap;
    ///
    /// let map = TreeMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(map.debug_structure(), "2 B\n  1 R\n  3 R\n");
    /// ```
    pub fn debug_structure(&self) -> String {
        let mut out = String::new();
        self.write_node(&mut out, self.root, 0);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        let color = match node.color {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        let _ = writeln!(out, "{}{:?} {}", "  ".repeat(depth), node.key, color);
        self.write_node(out, node.left, depth + 1);
        self.write_node(out, node.right, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TreeError;
    use crate::types::{Color, NULL_NODE};
    use crate::TreeMap;

    fn sample() -> TreeMap<i32, i32> {
        (0..31).map(|i| (i, i)).collect()
    }

    fn assert_corrupted(map: &TreeMap<i32, i32>, component: &str) {
        match map.validate() {
            Err(TreeError::CorruptedTree(message)) => {
                assert!(message.contains(component), "unexpected message: {}", message)
            }
            other => panic!("expected corruption in {}, got {:?}", component, other),
        }
        assert!(!map.check_invariants());
    }

    #[test]
    fn test_valid_trees_pass() {
        assert!(TreeMap::<i32, i32>::new().validate().is_ok());
        let map = sample();
        assert!(map.validate().is_ok());
        assert!(map.check_invariants());
        assert!(map.black_height() >= 3);
        assert!(map.height() >= 5 && map.height() <= 10);
    }

    #[test]
    fn test_detects_red_root() {
        let mut map = sample();
        let root = map.root;
        map.set_color(root, Color::Red);
        assert_corrupted(&map, "root");
    }

    #[test]
    fn test_detects_red_red_violation() {
        let mut map = sample();
        // Paint a path of two nodes red.
        let child = map.left_of(map.root);
        let grandchild = map.left_of(child);
        map.set_color(child, Color::Red);
        map.set_color(grandchild, Color::Red);
        assert!(map.validate().is_err());
    }

    #[test]
    fn test_detects_unbalanced_black_height() {
        let mut map = sample();
        let mut leaf = map.root;
        while map.left_of(leaf) != NULL_NODE {
            leaf = map.left_of(leaf);
        }
        // Flipping one leaf's color changes the black count of its path only.
        let flipped = match map.color_of(leaf) {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        };
        map.set_color(leaf, flipped);
        assert!(map.validate().is_err());
    }

    #[test]
    fn test_detects_out_of_order_keys() {
        let mut map = sample();
        let first = map.first_node();
        map.node_mut(first).key = 1000;
        assert_corrupted(&map, "order");
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut map = sample();
        let child = map.right_of(map.root);
        map.node_mut(child).parent = NULL_NODE;
        assert_corrupted(&map, "links");
        assert!(map.check_links().is_err());
    }

    #[test]
    fn test_detects_size_mismatch() {
        let mut map = sample();
        map.len += 1;
        assert_corrupted(&map, "size");
    }

    #[test]
    fn test_debug_structure_indents_children() {
        let map = sample();
        let dump = map.debug_structure();
        assert_eq!(dump.lines().count(), 31);
        let root_line = format!("{} B", map.key_of(map.root).unwrap());
        assert_eq!(dump.lines().next(), Some(root_line.as_str()));
        assert!(dump.lines().skip(1).all(|line| line.starts_with("  ")));
    }
}
