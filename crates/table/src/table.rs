//! The table coordinator.

use crate::iter::Rows;
use crate::list::{IndexList, Nth};
use trestle_core::{
    Error, OrderedIndex, Result, RowId, RowStore, SearchIndex, SeekIndex,
};

/// A multi-index in-memory table.
///
/// `R` is the row type; `I` is a tuple of indexes, each built over its own
/// key derived from the rows. Every mutation keeps all indexes consistent:
/// insertion is all-or-nothing across them, and the swap-remove performed
/// by erasure is announced to each index so stored row ids stay valid.
///
/// References and iterators returned by lookup methods are invalidated by
/// any mutating operation; the borrow checker enforces this.
///
/// A table is an ordinary value: moving it transfers storage and every
/// index, and `core::mem::take` leaves behind an empty, usable table.
#[derive(Debug)]
pub struct Table<R, I> {
    rows: RowStore<R>,
    indexes: I,
}

impl<R, I> Table<R, I> {
    /// Creates an empty table with default-constructed indexes.
    pub fn new() -> Self
    where
        I: Default,
    {
        Self::with_indexes(I::default())
    }

    /// Creates an empty table around pre-built indexes, for callbacks that
    /// carry state.
    pub fn with_indexes(indexes: I) -> Self {
        Self {
            rows: RowStore::new(),
            indexes,
        }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `id`, or `None` when out of range.
    pub fn get(&self, id: RowId) -> Option<&R> {
        self.rows.get(id)
    }

    /// All rows in storage order. Random access; the order reflects
    /// swap-removes, not insertion order.
    pub fn rows(&self) -> &[R] {
        self.rows.as_slice()
    }

    /// Iterates rows in storage order.
    pub fn iter(&self) -> core::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Shared access to the index at position `N`.
    pub fn index<const N: usize>(&self) -> &<I as Nth<N>>::Output
    where
        I: Nth<N>,
    {
        self.indexes.nth()
    }
}

impl<R, I: IndexList<R>> Table<R, I> {
    /// Pre-grows storage and every index for `additional` more rows.
    pub fn reserve(&mut self, additional: usize) {
        self.rows.reserve(additional);
        self.indexes.list_reserve(additional);
    }

    /// Inserts a row, returning a reference to it in its new home.
    ///
    /// Fails with [`Error::Duplicate`] if any index already contains a row
    /// with an equal key, in which case the table is left exactly as it
    /// was: indexes that accepted the row before the refusing one are
    /// unwound and the appended row is removed again.
    pub fn insert(&mut self, row: R) -> Result<&R> {
        let id = self.rows.append(row);
        match self.indexes.list_insert(self.rows.as_slice(), id) {
            Ok(()) => Ok(&self.rows[id]),
            Err(_existing) => {
                self.rows.swap_remove(id);
                Err(Error::Duplicate)
            }
        }
    }

    /// Inserts every row from `rows`, returning how many were inserted.
    ///
    /// Reserves ahead when the iterator reports a finite size. Stops at the
    /// first duplicate; rows inserted before the failure stay in the table.
    pub fn insert_all<T>(&mut self, rows: T) -> Result<usize>
    where
        T: IntoIterator<Item = R>,
    {
        let iter = rows.into_iter();
        let (lower, upper) = iter.size_hint();
        self.reserve(upper.unwrap_or(lower));
        let mut inserted = 0;
        for row in iter {
            self.insert(row)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Inserts a row, or merges it into the existing one on a duplicate.
    ///
    /// On a duplicate in any index the partial insertion is rolled back and
    /// `merge(existing, row)` is called with the new row passed by value.
    /// Returns the surviving row. Never fails.
    ///
    /// The merge callback must not change the existing row's keys; the
    /// indexes are not rebuilt around it.
    pub fn upsert(&mut self, row: R, merge: impl FnOnce(&mut R, R)) -> &mut R {
        let id = self.rows.append(row);
        match self.indexes.list_insert(self.rows.as_slice(), id) {
            Ok(()) => &mut self.rows[id],
            Err(existing) => {
                let (row, _) = self.rows.swap_remove(id);
                merge(&mut self.rows[existing], row);
                &mut self.rows[existing]
            }
        }
    }

    /// Looks up a row through the index at position `N`.
    pub fn find<const N: usize, Q: ?Sized>(&self, key: &Q) -> Option<&R>
    where
        I: Nth<N>,
        <I as Nth<N>>::Output: SearchIndex<R, Q>,
    {
        let id = self.indexes.nth().search(self.rows.as_slice(), key)?;
        Some(&self.rows[id])
    }

    /// Looks up a row through index `N`, inserting `create()` if absent.
    ///
    /// The created row must match `key` under index `N`, and fails with
    /// [`Error::Duplicate`] if it collides in any *other* index; the table
    /// is unchanged in that case.
    pub fn find_or_create<const N: usize, Q: ?Sized>(
        &mut self,
        key: &Q,
        create: impl FnOnce() -> R,
    ) -> Result<&R>
    where
        I: Nth<N>,
        <I as Nth<N>>::Output: SearchIndex<R, Q>,
    {
        if let Some(id) = self.indexes.nth().search(self.rows.as_slice(), key) {
            return Ok(&self.rows[id]);
        }
        self.insert(create())
    }

    /// Removes the row at `id` and returns it.
    ///
    /// O(1): the last row is swapped into the vacated slot and every index
    /// is told about the move. Panics if `id` is out of range; erasing an
    /// id that (due to an earlier swap) no longer names the row the caller
    /// had in mind is a contract violation the table cannot detect.
    pub fn erase(&mut self, id: RowId) -> R {
        self.indexes.list_erase(self.rows.as_slice(), id);
        let (row, moved_from) = self.rows.swap_remove(id);
        if let Some(from) = moved_from {
            self.indexes.list_relocate(self.rows.as_slice(), from, id);
        }
        row
    }

    /// Finds a row through index `N` and erases it, returning it if found.
    pub fn erase_match<const N: usize, Q: ?Sized>(&mut self, key: &Q) -> Option<R>
    where
        I: Nth<N>,
        <I as Nth<N>>::Output: SearchIndex<R, Q>,
    {
        let id = self.indexes.nth().search(self.rows.as_slice(), key)?;
        Some(self.erase(id))
    }

    /// Erases every row matching `predicate`, returning the count.
    ///
    /// Scans ids low to high; after an erase the same id is re-examined,
    /// since the swap just moved an unvisited row into it.
    pub fn erase_all(&mut self, mut predicate: impl FnMut(&R) -> bool) -> usize {
        let mut id = 0;
        let mut erased = 0;
        while id < self.rows.len() {
            if predicate(&self.rows[id]) {
                self.erase(id);
                erased += 1;
            } else {
                id += 1;
            }
        }
        erased
    }

    /// Drops every row and entry. Equivalent to a freshly built table.
    pub fn clear(&mut self) {
        self.indexes.list_clear();
        self.rows.clear();
    }

    /// Rows in the natural order of the index at position `N` (key order
    /// for a tree, insertion order for an insertion-order index).
    pub fn ordered<'a, const N: usize>(
        &'a self,
    ) -> Rows<'a, R, <<I as Nth<N>>::Output as OrderedIndex<'a, R>>::Cursor>
    where
        I: Nth<N>,
        <I as Nth<N>>::Output: OrderedIndex<'a, R>,
    {
        Rows::new(self.rows.as_slice(), self.indexes.nth().cursor())
    }

    /// Rows from the first whose key is not before `key` (lower bound) to
    /// the end of index `N`'s order.
    pub fn seek<'a, const N: usize, Q: ?Sized>(
        &'a self,
        key: &Q,
    ) -> Rows<'a, R, <<I as Nth<N>>::Output as OrderedIndex<'a, R>>::Cursor>
    where
        I: Nth<N>,
        <I as Nth<N>>::Output: SeekIndex<'a, R, Q>,
    {
        let rows = self.rows.as_slice();
        Rows::new(rows, self.indexes.nth().cursor_at(rows, key))
    }

    /// Rows whose keys fall in `[lower, upper)` under index `N`.
    pub fn range<'a, const N: usize, Q: ?Sized>(
        &'a self,
        lower: &Q,
        upper: &'a Q,
    ) -> impl Iterator<Item = &'a R>
    where
        I: Nth<N>,
        <I as Nth<N>>::Output: SeekIndex<'a, R, Q>,
    {
        let rows = self.rows.as_slice();
        let index = self.indexes.nth();
        index
            .cursor_at(rows, lower)
            .map(move |id| &rows[id])
            .take_while(move |row| index.before(row, upper))
    }
}

impl<R, I: Default> Default for Table<R, I> {
    fn default() -> Self {
        Self::with_indexes(I::default())
    }
}

impl<'a, R, I> IntoIterator for &'a Table<R, I> {
    type Item = &'a R;
    type IntoIter = core::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
