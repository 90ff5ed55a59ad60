//! `MutablePriorityQueue` — binary min-heap with decrease-key.
//!
//! Each queued vertex slot has a *handle*: its current position in the heap
//! array.  Handles are updated on every sift, so `decrease_key` finds the
//! element in O(1) and restores heap order in O(log n) without a linear
//! search or a remove-and-reinsert.
//!
//! ```text
//! heap:    [(key, slot), …]      min-heap on key
//! handles: slot → heap position  (NOT_QUEUED when absent)
//! ```

use cr_core::VertexIdx;

const NOT_QUEUED: u32 = u32::MAX;

/// Min-priority queue of vertex slots keyed by tentative distance.
#[derive(Debug, Default)]
pub struct MutablePriorityQueue {
    heap:    Vec<(u32, VertexIdx)>,
    handles: Vec<u32>,
}

impl MutablePriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the handle table for a graph with `slots` vertex slots.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            heap:    Vec::with_capacity(slots),
            handles: vec![NOT_QUEUED; slots],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: VertexIdx) -> bool {
        self.position(item).is_some()
    }

    /// Current key of a queued item.
    pub fn key(&self, item: VertexIdx) -> Option<u32> {
        self.position(item).map(|pos| self.heap[pos].0)
    }

    /// Insert `item` with `key`.  O(log n).
    ///
    /// Inserting an item that is already queued is a caller error; in release
    /// builds it is treated as a decrease-key.
    pub fn insert(&mut self, item: VertexIdx, key: u32) {
        debug_assert!(!self.contains(item), "{item} inserted twice");
        if self.contains(item) {
            self.decrease_key(item, key);
            return;
        }
        if item.index() >= self.handles.len() {
            self.handles.resize(item.index() + 1, NOT_QUEUED);
        }
        let pos = self.heap.len();
        self.heap.push((key, item));
        self.sift_up(pos);
    }

    /// Remove and return the item with the smallest key.  O(log n).
    pub fn extract_min(&mut self) -> Option<(VertexIdx, u32)> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let (key, item) = self.heap.pop()?;
        self.handles[item.index()] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, key))
    }

    /// Lower the key of a queued item.  O(log n).
    ///
    /// Only valid for an item currently in the queue and a key strictly
    /// smaller than its current one.  Debug builds assert both; release builds
    /// ignore the call.
    pub fn decrease_key(&mut self, item: VertexIdx, key: u32) {
        let pos = self.position(item);
        debug_assert!(pos.is_some(), "decrease_key on {item}, which is not queued");
        let Some(pos) = pos else {
            return;
        };
        debug_assert!(
            key < self.heap[pos].0,
            "decrease_key on {item}: new key {key} is not below {}",
            self.heap[pos].0
        );
        if key >= self.heap[pos].0 {
            return;
        }
        self.heap[pos].0 = key;
        self.sift_up(pos);
    }

    // ── Heap internals ────────────────────────────────────────────────────

    #[inline]
    fn position(&self, item: VertexIdx) -> Option<usize> {
        match self.handles.get(item.index()) {
            Some(&pos) if pos != NOT_QUEUED => Some(pos as usize),
            _ => None,
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        let entry = self.heap[pos];
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if entry.0 >= self.heap[parent].0 {
                break;
            }
            // Move parent down.
            let moved = self.heap[parent];
            self.heap[pos] = moved;
            self.handles[moved.1.index()] = pos as u32;
            pos = parent;
        }
        self.heap[pos] = entry;
        self.handles[entry.1.index()] = pos as u32;
    }

    fn sift_down(&mut self, mut pos: usize) {
        let entry = self.heap[pos];
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right].0 < self.heap[left].0 {
                right
            } else {
                left
            };
            if entry.0 <= self.heap[child].0 {
                break;
            }
            // Move smaller child up.
            let moved = self.heap[child];
            self.heap[pos] = moved;
            self.handles[moved.1.index()] = pos as u32;
            pos = child;
        }
        self.heap[pos] = entry;
        self.handles[entry.1.index()] = pos as u32;
    }
}
