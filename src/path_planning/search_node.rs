//! Search nodes and the arena that owns them
//!
//! Nodes are never mutated or removed once pushed; a cheaper route to a cell
//! produces a new node. Predecessor links are arena indices, so the nodes of
//! one search form a tree rooted at the initial state.

use std::ops::Index;

use crate::common::Coordinate;

/// Index of a node inside its `NodeArena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A cell reached during search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    coordinate: Coordinate,
    cost: u32,
    heuristic: u32,
    priority: u32,
    parent: Option<NodeId>,
}

impl SearchNode {
    pub fn new(coordinate: Coordinate, cost: u32, heuristic: u32, parent: Option<NodeId>) -> Self {
        SearchNode {
            coordinate,
            cost,
            heuristic,
            priority: cost + heuristic,
            parent,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Number of moves from the start
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// `cost + heuristic`, fixed at construction
    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena { nodes: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk predecessor links from `id` back to the root, `id` first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors { arena: self, next: Some(id) }
    }

    /// Coordinates from the root to `id`
    pub fn path_to(&self, id: NodeId) -> Vec<Coordinate> {
        let mut path: Vec<Coordinate> = self.ancestors(id).map(|node| node.coordinate).collect();
        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_fixed_at_construction() {
        let node = SearchNode::new(Coordinate::new(1, 2), 3, 4, None);
        assert_eq!(node.priority(), 7);
        assert_eq!(node.cost(), 3);
        assert_eq!(node.heuristic(), 4);
        assert!(node.parent().is_none());
    }

    #[test]
    fn test_path_to_root() {
        let mut arena = NodeArena::with_capacity(4);
        let root = arena.push(SearchNode::new(Coordinate::new(0, 0), 0, 2, None));
        let a = arena.push(SearchNode::new(Coordinate::new(0, 1), 1, 1, Some(root)));
        let b = arena.push(SearchNode::new(Coordinate::new(1, 1), 2, 0, Some(a)));
        // sibling branch that is not on the path
        arena.push(SearchNode::new(Coordinate::new(1, 0), 1, 1, Some(root)));

        assert_eq!(arena.len(), 4);
        assert_eq!(
            arena.path_to(b),
            vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 1)]
        );
        assert_eq!(arena.ancestors(b).count() as u32, arena[b].cost() + 1);
        assert_eq!(arena.path_to(root), vec![Coordinate::new(0, 0)]);
    }
}
