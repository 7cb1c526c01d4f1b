//! Indexed binary min-heap over search-node indices.
//!
//! `std::collections::BinaryHeap` cannot update a queued entry, which forces
//! either duplicate entries or stale-entry skipping.  This heap tracks each
//! node's position so a cheaper route found later re-keys the existing entry
//! in place.

use crate::node::{NodeIdx, SearchNode};

const NOT_QUEUED: usize = usize::MAX;

pub(crate) struct OpenSet {
    /// Heap-ordered node indices.
    heap: Vec<NodeIdx>,
    /// `slot[node]` = position of `node` in `heap`, or `NOT_QUEUED`.
    slot: Vec<usize>,
}

impl OpenSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: Vec::with_capacity(capacity), slot: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn contains(&self, node: NodeIdx) -> bool {
        self.slot.get(node).is_some_and(|&pos| pos != NOT_QUEUED)
    }

    /// Queue `node`, which must not already be queued.
    pub fn push(&mut self, node: NodeIdx, nodes: &[SearchNode]) {
        debug_assert!(!self.contains(node), "node {node} queued twice");
        if self.slot.len() <= node {
            self.slot.resize(node + 1, NOT_QUEUED);
        }
        let pos = self.heap.len();
        self.heap.push(node);
        self.slot[node] = pos;
        self.sift_up(pos, nodes);
    }

    /// Remove and return the node with the smallest `(f, seq)`.
    pub fn pop(&mut self, nodes: &[SearchNode]) -> Option<NodeIdx> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slot[top] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0, nodes);
        }
        Some(top)
    }

    /// Restore heap order after `nodes[node]`'s key decreased.
    pub fn decrease_key(&mut self, node: NodeIdx, nodes: &[SearchNode]) {
        let pos = self.slot[node];
        debug_assert_ne!(pos, NOT_QUEUED, "decrease_key on node {node} not in open set");
        self.sift_up(pos, nodes);
    }

    // ── Heap internals ────────────────────────────────────────────────────

    #[inline]
    fn less(&self, a: usize, b: usize, nodes: &[SearchNode]) -> bool {
        nodes[self.heap[a]].order_key() < nodes[self.heap[b]].order_key()
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slot[self.heap[a]] = a;
        self.slot[self.heap[b]] = b;
    }

    fn sift_up(&mut self, mut pos: usize, nodes: &[SearchNode]) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent, nodes) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize, nodes: &[SearchNode]) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left, nodes) { right } else { left };
            if !self.less(child, pos, nodes) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}
