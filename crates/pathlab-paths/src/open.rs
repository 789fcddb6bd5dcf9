use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathlab_core::Coord;

/// One pending entry in the open set.
///
/// Entries are ordered by `(f, count)` only; the coordinate never takes part
/// in comparisons. `count` is unique per search, so the order is total and
/// equal-`f` entries come out in the order they went in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: i32,
    pub(crate) count: u64,
    pub(crate) idx: usize,
    pub(crate) coord: Coord,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, count) first.
        (other.f, other.count).cmp(&(self.f, self.count))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of pending cells plus a membership table indexed by
/// flat cell index.
#[derive(Debug)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    pending: Vec<bool>,
}

impl OpenSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            pending: vec![false; len],
        }
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.pending.get(idx).copied().unwrap_or(false)
    }

    pub(crate) fn push(&mut self, entry: OpenEntry) {
        self.pending[entry.idx] = true;
        self.heap.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<OpenEntry> {
        let entry = self.heap.pop()?;
        self.pending[entry.idx] = false;
        Some(entry)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
