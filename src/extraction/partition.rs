//! In-place active/removed partition over a fixed node slice.
//!
//! The slice is split at a moving boundary `size`:
//!
//! ```text
//! ┌──────────── active ────────────┬──────── removed ────────┐
//! │ n0  n1  n2  ...         n(s-1) │ ns  ...          n(len-1)│
//! └────────────────────────────────┴──────────────────────────┘
//!                                  ^ size
//! ```
//!
//! Popping a node moves it to the front of the removed region, so the nodes
//! removed during one trial always sit in `[size, trial_start)`. No node is
//! ever copied out of the slice or duplicated; the slice stays a permutation
//! of its initial content.

use crate::core::Node;

/// Active/removed view over a caller-owned node slice.
#[derive(Debug)]
pub struct NodePartition<'a> {
    nodes: &'a mut [Node],
    size: usize,
}

impl<'a> NodePartition<'a> {
    /// Create a partition with every node active.
    pub fn new(nodes: &'a mut [Node]) -> Self {
        let size = nodes.len();
        Self { nodes, size }
    }

    /// Number of active nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True when no active nodes remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total number of nodes, active and removed.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Active node at `index`.
    #[inline]
    pub fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    /// Active region `[0, size)`.
    #[inline]
    pub fn active(&self) -> &[Node] {
        &self.nodes[..self.size]
    }

    /// Nodes removed since the boundary was at `mark`, i.e. `[size, mark)`.
    #[inline]
    pub fn removed_since(&self, mark: usize) -> &[Node] {
        &self.nodes[self.size..mark]
    }

    /// Remove the active node at `index`.
    ///
    /// Everything after `index` shifts one slot left, keeping the relative
    /// order of the remaining active nodes, and the removed node lands at the
    /// new boundary slot.
    #[inline]
    pub fn pop(&mut self, index: usize) {
        debug_assert!(index < self.size, "pop index {index} outside active range");
        self.nodes[index..self.size].rotate_left(1);
        self.size -= 1;
    }

    /// Return every node removed since the boundary was at `original_size`
    /// to the active region.
    ///
    /// The whole range `[0, original_size)` is re-sorted ascending by angle
    /// with a selection sort, then the boundary is reset.
    pub fn restore(&mut self, original_size: usize) {
        debug_assert!(original_size >= self.size && original_size <= self.nodes.len());

        for i in (1..original_size).rev() {
            // Largest angle in [0, i] goes to slot i
            let mut select = 0;
            for j in 1..=i {
                if self.nodes[j].angle > self.nodes[select].angle {
                    select = j;
                }
            }
            self.nodes.swap(i, select);
        }

        self.size = original_size;
    }
}
