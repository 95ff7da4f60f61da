//! Red-black tree ordered map in Rust.
//!
//! This crate provides [`TreeMap`], a sorted key-value map backed by a
//! red-black tree whose nodes live in an index-addressed arena. Besides the
//! usual map operations it offers navigation queries (first, last, next,
//! previous, ceiling, floor, higher, lower), a bidirectional [`Cursor`] that
//! can remove entries mid-walk and detects outside modification, and
//! bounds-checked range views ([`RangeView`], [`RangeViewMut`]).
//!
//! # Examples
//!
//! ```
//! use rbtreemap::{TreeError, TreeMap};
//!
//! let mut map: TreeMap<i32, &str> = TreeMap::new();
//! map.insert(1, "one");
//! map.insert(3, "three");
//! map.insert(2, "two");
//!
//! assert_eq!(map.first_key(), Some(&1));
//! assert_eq!(map.previous_key(&3), Some(&2));
//!
//! // Remove while walking.
//! let mut cursor = map.cursor();
//! while cursor.has_next() {
//!     let (key, _) = cursor.next(&map).unwrap();
//!     if *key == 2 {
//!         cursor.remove(&mut map).unwrap();
//!     }
//! }
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 3]);
//!
//! // Range views reject keys outside their bounds.
//! let mut low = map.range_mut(..3).unwrap();
//! assert_eq!(low.insert(0, "zero"), Ok(None));
//! assert_eq!(low.insert(5, "five"), Err(TreeError::KeyOutOfRange));
//! ```
//!
//! Key order comes from a [`Comparator`]: [`NaturalOrder`] (the key's `Ord`)
//! by default, [`ReverseOrder`], or any `Fn(&K, &K) -> Ordering` closure.

mod arena;
mod comparator;
mod construction;
mod cursor;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod navigation;
mod node;
mod range_queries;
mod rotation;
mod types;
mod validation;

pub use arena::ArenaStats;
pub use comparator::{Comparator, NaturalOrder, ReverseOrder};
pub use cursor::Cursor;
pub use error::{CursorResult, ModifyResult, TreeError, TreeResult};
pub use iteration::{IntoIter, Iter, Keys, RangeIter, Values};
pub use range_queries::{KeyRange, RangeView, RangeViewMut};
pub use types::{Color, TreeMap, DEFAULT_CAPACITY};
