//! Insertion-order index.
//!
//! An intrusive doubly linked list superimposed on an array of link cells,
//! one per row id, with cell 0 as the head/tail sentinel. Insert-at-tail
//! and erase-anywhere are O(1); traversal is O(n). The cell array grows in
//! lock step with row storage and shrinks when the tail row leaves.

use alloc::vec::Vec;
use trestle_core::{OrderedIndex, RowId, TableIndex};

const SENTINEL: usize = 0;

#[derive(Clone, Copy, Debug, Default)]
struct Link {
    next: usize,
    prev: usize,
}

/// Index that remembers the order rows were inserted in.
///
/// Takes no callbacks and supports no lookup; its only product is
/// [`InsertionOrderIndex::ordered`].
#[derive(Clone, Debug, Default)]
pub struct InsertionOrderIndex {
    links: Vec<Link>,
}

impl InsertionOrderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link cell for a row id. Cell 0 is the sentinel.
    fn cell(id: RowId) -> usize {
        id + 1
    }

    /// Bidirectional cursor over row ids in insertion order.
    pub fn ordered(&self) -> OrderCursor<'_> {
        if self.links.is_empty() || self.links[SENTINEL].next == SENTINEL {
            return OrderCursor {
                links: &self.links,
                front: SENTINEL,
                back: SENTINEL,
                exhausted: true,
            };
        }
        OrderCursor {
            links: &self.links,
            front: self.links[SENTINEL].next,
            back: self.links[SENTINEL].prev,
            exhausted: false,
        }
    }
}

impl<R> TableIndex<R> for InsertionOrderIndex {
    fn reserve(&mut self, additional: usize) {
        let sentinel = usize::from(self.links.is_empty());
        self.links.reserve(additional + sentinel);
    }

    fn insert(&mut self, _rows: &[R], id: RowId) -> Result<(), RowId> {
        if self.links.is_empty() {
            self.links.push(Link {
                next: SENTINEL,
                prev: SENTINEL,
            });
        }
        let cell = Self::cell(id);
        debug_assert_eq!(cell, self.links.len(), "row ids must arrive densely");
        let tail = self.links[SENTINEL].prev;
        self.links.push(Link {
            next: SENTINEL,
            prev: tail,
        });
        self.links[tail].next = cell;
        self.links[SENTINEL].prev = cell;
        Ok(())
    }

    fn erase(&mut self, _rows: &[R], id: RowId) {
        let cell = Self::cell(id);
        let Link { next, prev } = self.links[cell];
        self.links[prev].next = next;
        self.links[next].prev = prev;
        // The tail cell dies with the tail row; an interior cell is taken
        // over by the relocated tail row instead.
        if cell == self.links.len() - 1 {
            self.links.pop();
        }
    }

    fn relocate(&mut self, _rows: &[R], from: RowId, to: RowId) {
        let from_cell = Self::cell(from);
        let to_cell = Self::cell(to);
        debug_assert_eq!(from_cell, self.links.len() - 1, "only the tail row moves");
        let link = self.links[from_cell];
        self.links[link.prev].next = to_cell;
        self.links[link.next].prev = to_cell;
        self.links[to_cell] = link;
        self.links.pop();
    }

    fn clear(&mut self) {
        self.links.clear();
    }
}

/// Bidirectional cursor over row ids in insertion order.
pub struct OrderCursor<'a> {
    links: &'a [Link],
    front: usize,
    back: usize,
    exhausted: bool,
}

impl<'a> Iterator for OrderCursor<'a> {
    type Item = RowId;

    fn next(&mut self) -> Option<RowId> {
        if self.exhausted {
            return None;
        }
        let cell = self.front;
        if cell == self.back {
            self.exhausted = true;
        } else {
            self.front = self.links[cell].next;
        }
        Some(cell - 1)
    }
}

impl<'a> DoubleEndedIterator for OrderCursor<'a> {
    fn next_back(&mut self) -> Option<RowId> {
        if self.exhausted {
            return None;
        }
        let cell = self.back;
        if cell == self.front {
            self.exhausted = true;
        } else {
            self.back = self.links[cell].prev;
        }
        Some(cell - 1)
    }
}

impl<'a, R> OrderedIndex<'a, R> for InsertionOrderIndex {
    type Cursor = OrderCursor<'a>;

    fn cursor(&'a self) -> OrderCursor<'a> {
        self.ordered()
    }
}
