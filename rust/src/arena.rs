//! Slot arena that owns every node of a tree.
//!
//! Nodes are addressed by [`NodeId`] indices instead of pointers. A freed slot
//! goes on a free list and is handed out again by the next allocation, so ids
//! are stable for as long as the node they name is alive.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

pub type NodeId = u32;
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for an arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator with a free list for slot reuse.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    storage: Vec<Option<T>>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    ///
    /// # Panics
    ///
    /// Panics if the arena would need more than `u32::MAX - 1` slots.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = Some(item);
            free_index
        } else {
            self.storage.push(Some(item));
            self.storage.len() - 1
        };
        self.allocated += 1;

        match NodeId::try_from(index) {
            Ok(id) if id != NULL_NODE => id,
            _ => panic!("arena exhausted: slot {} does not fit in a NodeId", index),
        }
    }

    /// Deallocate an item and hand it back to the caller.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = Self::index_of(id)?;
        let item = self.storage.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = Self::index_of(id)?;
        self.storage.get(index)?.as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = Self::index_of(id)?;
        self.storage.get_mut(index)?.as_mut()
    }

    /// Get mutable references to two distinct items at once.
    pub fn get2_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut T, &mut T)> {
        let (ia, ib) = (Self::index_of(a)?, Self::index_of(b)?);
        if ia == ib || ia.max(ib) >= self.storage.len() {
            return None;
        }
        let (low, high) = self.storage.split_at_mut(ia.max(ib));
        let (first, second) = (low[ia.min(ib)].as_mut()?, high[0].as_mut()?);
        if ia < ib {
            Some((first, second))
        } else {
            Some((second, first))
        }
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.storage.capacity();
        let utilization = if total_capacity > 0 {
            self.allocated as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count: self.allocated,
            free_count: self.free_list.len(),
            utilization,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// Reserve room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        let needed = additional.saturating_sub(self.free_list.len());
        self.storage.reserve(needed);
    }

    /// Clear all items from the arena
    pub fn clear(&mut self) {
        self.storage.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    #[inline]
    fn index_of(id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        usize::try_from(id).ok()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Indexing is for ids the tree itself holds; a vacant slot here means the
// link structure is broken.
impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}
