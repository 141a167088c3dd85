//! Per-index key derivation contracts.
//!
//! An index never stores keys; it stores row ids and derives keys on demand
//! from current row storage through a callbacks value. Each index kind has a
//! base contract over rows (used by insert, erase, and relocate) and a query
//! extension over an arbitrary key type `Q` (used by find, seek, and range).
//! `Q` need not be the row type: a table of `String` rows can be queried
//! with `str`, or with a `usize` length for a length-keyed index. One
//! callbacks type may implement the query extension for several `Q` types.

/// Key contract for a hash index.
pub trait HashCallbacks<R> {
    /// 32-bit hash of the key this index derives from `row`.
    fn hash_row(&self, row: &R) -> u32;

    /// Whether two rows derive equal keys under this index.
    fn rows_equal(&self, a: &R, b: &R) -> bool;
}

/// Querying a hash index with a key of type `Q`.
///
/// `hash_key` must agree with [`HashCallbacks::hash_row`] whenever
/// [`HashQuery::matches`] would return true. It need not be injective:
/// an all-same-hash workload degrades to a linear scan but stays correct.
pub trait HashQuery<R, Q: ?Sized>: HashCallbacks<R> {
    /// Hash of a caller-supplied key.
    fn hash_key(&self, key: &Q) -> u32;

    /// Whether `row`'s derived key equals `key`.
    fn matches(&self, row: &R, key: &Q) -> bool;
}

/// Key contract for a tree index.
pub trait TreeCallbacks<R> {
    /// Whether `a`'s key orders strictly before `b`'s. Must be a strict
    /// weak order.
    fn row_before(&self, a: &R, b: &R) -> bool;

    /// Whether two rows derive equal keys under this index.
    fn rows_equal(&self, a: &R, b: &R) -> bool {
        !self.row_before(a, b) && !self.row_before(b, a)
    }
}

/// Querying a tree index with a key of type `Q`.
pub trait TreeQuery<R, Q: ?Sized>: TreeCallbacks<R> {
    /// Whether `row`'s key orders strictly before `key`.
    fn before(&self, row: &R, key: &Q) -> bool;

    /// Whether `row`'s key equals `key`.
    fn matches(&self, row: &R, key: &Q) -> bool;
}
