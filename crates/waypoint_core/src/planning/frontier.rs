use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::Cost;

use super::search_tree::SearchNodeId;

#[derive(Debug, Copy, Clone)]
struct HeapItem {
    search_node: SearchNodeId,

    /// g is the accumulated cost from the start to this entry's node
    g: Cost,

    /// f = g + h, with h being the heuristic estimate from this entry's
    /// node to the goal
    f: Cost,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip cost to make this a min-heap. Tie-breaking among
        // equal-cost entries is implementation defined.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| self.search_node.cmp(&other.search_node))
    }
}

/// Cost-ordered collection of the search nodes not yet expanded.
/// Insert and extract-min are O(log n).
pub struct Frontier {
    heap: BinaryHeap<HeapItem>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            heap: BinaryHeap::with_capacity(1024),
        }
    }

    pub fn insert(&mut self, search_node: SearchNodeId, g: Cost, f: Cost) {
        self.heap.push(HeapItem { search_node, g, f });
    }

    /// Removes and returns the entry with the smallest f, along with its g.
    pub fn extract_min(&mut self) -> Option<(SearchNodeId, Cost)> {
        self.heap
            .pop()
            .map(|item| (item.search_node, item.g))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
