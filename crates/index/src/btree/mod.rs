//! B-tree index over row ids.
//!
//! This module provides the ordered index: lookup, lower-bound seek, and
//! ordered traversal in O(log n), backed by a pooled B-tree whose nodes
//! hold row ids only.

mod cursor;
mod node;
mod tree;

pub use cursor::TreeCursor;
pub use node::{LEAF_FANOUT, PARENT_FANOUT};
pub use tree::TreeIndex;
