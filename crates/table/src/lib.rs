//! Trestle - a multi-index in-memory table.
//!
//! One contiguous row store, any number of attached indexes (hash
//! equality, B-tree order, insertion order), kept consistent through every
//! insert, erase, and relocation. Callers get relational-style lookups over
//! plain Rust values with no database machinery: no persistence, no
//! threads, no query language.
//!
//! Indexes are composed as a tuple at the type level, and each one derives
//! its key from the rows through a callbacks value, so the same table can
//! be addressed by several unrelated keys at once. Insertion is
//! all-or-nothing across indexes: if any index reports the row as a
//! duplicate, the others are unwound and the table is unchanged.
//!
//! # Example
//!
//! ```rust
//! use trestle::{HashCallbacks, HashQuery, HashIndex, Table};
//!
//! fn fnv(text: &str) -> u32 {
//!     let mut hash = 0x811c_9dc5_u32;
//!     for byte in text.bytes() {
//!         hash = (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193);
//!     }
//!     hash
//! }
//!
//! // Key string rows by their own text; queries come in as `str`.
//! #[derive(Default)]
//! struct ByText;
//!
//! impl HashCallbacks<&'static str> for ByText {
//!     fn hash_row(&self, row: &&'static str) -> u32 {
//!         fnv(row)
//!     }
//!     fn rows_equal(&self, a: &&'static str, b: &&'static str) -> bool {
//!         a == b
//!     }
//! }
//!
//! impl HashQuery<&'static str, str> for ByText {
//!     fn hash_key(&self, key: &str) -> u32 {
//!         fnv(key)
//!     }
//!     fn matches(&self, row: &&'static str, key: &str) -> bool {
//!         *row == key
//!     }
//! }
//!
//! let mut table: Table<&'static str, (HashIndex<ByText>,)> = Table::new();
//! table.insert("foo").unwrap();
//! table.insert("bar").unwrap();
//!
//! assert_eq!(table.find::<0, str>("foo"), Some(&"foo"));
//! assert!(table.insert("foo").is_err());
//! assert_eq!(table.erase_match::<0, str>("foo"), Some("foo"));
//! assert_eq!(table.find::<0, str>("foo"), None);
//! ```
//!
//! Row ids, which are positions in storage, are dense but not stable: erasure
//! swap-removes, so iteration in storage order is not insertion order once
//! anything has been erased. Tables needing a stable traversal attach an
//! [`InsertionOrderIndex`] or a [`TreeIndex`] and use
//! [`Table::ordered`].

#![no_std]

extern crate alloc;

mod iter;
mod list;
mod table;

pub use iter::Rows;
pub use list::{IndexList, Nth};
pub use table::Table;

pub use trestle_core::{
    Error, HashCallbacks, HashQuery, Result, RowId, TreeCallbacks, TreeQuery,
};
pub use trestle_index::{HashIndex, InsertionOrderIndex, TreeIndex};
