//! Open set ordered by priority, first-in-first-out among equal priorities

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::common::{MazeError, MazeResult};
use crate::path_planning::search_node::NodeId;

/// Frontier entry (min-heap on priority, then insertion sequence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    priority: u32,
    sequence: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Plain priority queue of node ids.
///
/// Duplicate entries for one cell are allowed; stale ones are filtered by the
/// caller when popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, node: NodeId, priority: u32) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            node,
        });
        self.next_sequence += 1;
    }

    /// Remove the lowest-priority entry, earliest pushed first on ties
    pub fn pop_best(&mut self) -> MazeResult<NodeId> {
        self.heap.pop().map(|entry| entry.node).ok_or(MazeError::EmptyFrontier)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Coordinate;
    use crate::path_planning::search_node::{NodeArena, SearchNode};

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..n)
            .map(|i| arena.push(SearchNode::new(Coordinate::new(0, i), 0, 0, None)))
            .collect()
    }

    #[test]
    fn test_pop_lowest_priority_first() {
        let ids = ids(3);
        let mut frontier = Frontier::new();
        frontier.push(ids[0], 9);
        frontier.push(ids[1], 2);
        frontier.push(ids[2], 5);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop_best().unwrap(), ids[1]);
        assert_eq!(frontier.pop_best().unwrap(), ids[2]);
        assert_eq!(frontier.pop_best().unwrap(), ids[0]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_ties_are_fifo() {
        let ids = ids(5);
        let mut frontier = Frontier::with_capacity(5);
        frontier.push(ids[3], 4);
        frontier.push(ids[0], 4);
        frontier.push(ids[4], 1);
        frontier.push(ids[2], 4);
        frontier.push(ids[1], 4);

        let order: Vec<NodeId> = std::iter::from_fn(|| frontier.pop_best().ok()).collect();
        assert_eq!(order, vec![ids[4], ids[3], ids[0], ids[2], ids[1]]);
    }

    #[test]
    fn test_pop_empty() {
        let mut frontier = Frontier::new();
        assert!(matches!(frontier.pop_best(), Err(MazeError::EmptyFrontier)));
    }
}
