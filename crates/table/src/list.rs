//! Heterogeneous index lists.
//!
//! A table's indexes are a tuple, one field per index, so each index keeps
//! its own callbacks and element type with no boxing. [`IndexList`] drives
//! the operations that fan out across every index; [`Nth`] selects a single
//! index by position for lookups.

use trestle_core::{RowId, TableIndex};

/// Fan-out operations over every index of a table, in declaration order.
pub trait IndexList<R> {
    fn list_reserve(&mut self, additional: usize);

    /// Offers the row at `id` to each index in order. If any index refuses
    /// with a duplicate, the indexes that had already accepted are unwound
    /// and the duplicate's row id is returned; storage is untouched either
    /// way.
    fn list_insert(&mut self, rows: &[R], id: RowId) -> Result<(), RowId>;

    fn list_erase(&mut self, rows: &[R], id: RowId);

    fn list_relocate(&mut self, rows: &[R], from: RowId, to: RowId);

    fn list_clear(&mut self);
}

/// Access to the index at tuple position `N`.
pub trait Nth<const N: usize> {
    type Output;

    fn nth(&self) -> &Self::Output;
}

macro_rules! impl_index_list {
    ($($T:ident => $idx:tt),+) => {
        impl<R, $($T: TableIndex<R>),+> IndexList<R> for ($($T,)+) {
            fn list_reserve(&mut self, additional: usize) {
                $( self.$idx.reserve(additional); )+
            }

            fn list_insert(&mut self, rows: &[R], id: RowId) -> Result<(), RowId> {
                let mut accepted = 0usize;
                let mut outcome = Ok(());
                $(
                    if outcome.is_ok() {
                        match self.$idx.insert(rows, id) {
                            Ok(()) => accepted += 1,
                            Err(existing) => outcome = Err(existing),
                        }
                    }
                )+
                if outcome.is_err() {
                    // Unwind the indexes that had already accepted; the row
                    // is still present in `rows` at this point.
                    $(
                        if $idx < accepted {
                            self.$idx.erase(rows, id);
                        }
                    )+
                }
                outcome
            }

            fn list_erase(&mut self, rows: &[R], id: RowId) {
                $( self.$idx.erase(rows, id); )+
            }

            fn list_relocate(&mut self, rows: &[R], from: RowId, to: RowId) {
                $( self.$idx.relocate(rows, from, to); )+
            }

            fn list_clear(&mut self) {
                $( self.$idx.clear(); )+
            }
        }
    };
}

impl_index_list!(A => 0);
impl_index_list!(A => 0, B => 1);
impl_index_list!(A => 0, B => 1, C => 2);
impl_index_list!(A => 0, B => 1, C => 2, D => 3);

macro_rules! impl_nth {
    ($N:literal => $Out:ident in ($($T:ident),+) at $idx:tt) => {
        impl<$($T),+> Nth<$N> for ($($T,)+) {
            type Output = $Out;

            fn nth(&self) -> &$Out {
                &self.$idx
            }
        }
    };
}

impl_nth!(0 => A in (A) at 0);
impl_nth!(0 => A in (A, B) at 0);
impl_nth!(1 => B in (A, B) at 1);
impl_nth!(0 => A in (A, B, C) at 0);
impl_nth!(1 => B in (A, B, C) at 1);
impl_nth!(2 => C in (A, B, C) at 2);
impl_nth!(0 => A in (A, B, C, D) at 0);
impl_nth!(1 => B in (A, B, C, D) at 1);
impl_nth!(2 => C in (A, B, C, D) at 2);
impl_nth!(3 => D in (A, B, C, D) at 3);
