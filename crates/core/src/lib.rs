//! Trestle Core - Row storage and index contracts for the trestle table.
//!
//! This crate provides the foundational pieces shared by every index kind and
//! by the table coordinator:
//!
//! - `RowId`: the positional identifier of a row in storage
//! - `RowStore`: growable contiguous row storage with swap-remove erasure
//! - `TableIndex` and friends: the capability set an index implements
//! - `HashCallbacks` / `TreeCallbacks`: per-index key derivation contracts
//! - `Error`: error type for table operations
//!
//! Row ids are dense positions in `[0, len)`. They are *not* stable across
//! erasure: removing a row swaps the last row into the vacated slot, and
//! every index is told about the move through [`TableIndex::relocate`].

#![no_std]

extern crate alloc;

mod error;
mod index;
mod key;
mod store;

pub use error::{Error, Result};
pub use index::{OrderedIndex, SearchIndex, SeekIndex, TableIndex};
pub use key::{HashCallbacks, HashQuery, TreeCallbacks, TreeQuery};
pub use store::{RowId, RowStore};
