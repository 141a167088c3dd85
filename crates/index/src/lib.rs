//! Trestle Index - Index implementations for the trestle table.
//!
//! This crate provides the three index kinds a table can compose:
//!
//! - `HashIndex`: amortized O(1) equality lookup; open-addressed with
//!   tombstones, and shrinks back down under erase-heavy workloads
//! - `TreeIndex`: O(log n) ordered lookup, range queries, and lower-bound
//!   seek over a pooled B-tree of row ids
//! - `InsertionOrderIndex`: O(1) bookkeeping of insertion order via an
//!   intrusive doubly linked list
//!
//! Indexes store row ids, never rows or keys: keys are derived on demand
//! from current row storage through the callbacks each index is built with
//! (see `trestle_core::HashCallbacks` and `trestle_core::TreeCallbacks`).
//!
//! # Example
//!
//! ```rust
//! use trestle_core::{SearchIndex, TableIndex, TreeCallbacks, TreeQuery};
//! use trestle_index::TreeIndex;
//!
//! // Order rows (plain integers here) by their own value.
//! #[derive(Default)]
//! struct ByValue;
//!
//! impl TreeCallbacks<u32> for ByValue {
//!     fn row_before(&self, a: &u32, b: &u32) -> bool {
//!         a < b
//!     }
//! }
//!
//! impl TreeQuery<u32, u32> for ByValue {
//!     fn before(&self, row: &u32, key: &u32) -> bool {
//!         row < key
//!     }
//!     fn matches(&self, row: &u32, key: &u32) -> bool {
//!         row == key
//!     }
//! }
//!
//! let rows: Vec<u32> = (0..100).map(|i| i * 3).collect();
//! let mut tree = TreeIndex::new(ByValue);
//! for id in 0..rows.len() {
//!     tree.insert(&rows, id).unwrap();
//! }
//!
//! assert_eq!(tree.search(&rows, &42), Some(14));
//! assert_eq!(tree.search(&rows, &43), None);
//!
//! // Row ids come back in key order.
//! let first: Vec<u32> = tree.ordered().take(3).map(|id| rows[id]).collect();
//! assert_eq!(first, vec![0, 3, 6]);
//! ```

#![no_std]

extern crate alloc;

pub mod btree;
pub mod hash;
pub mod order;

pub use btree::TreeIndex;
pub use hash::HashIndex;
pub use order::InsertionOrderIndex;
