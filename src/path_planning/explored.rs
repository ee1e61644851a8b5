//! Closed set and best-known priority bookkeeping

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::common::Coordinate;

/// Append-only set of expanded cells, remembering expansion order
#[derive(Debug, Clone, Default)]
pub struct ExploredSet {
    members: HashSet<Coordinate>,
    order: Vec<Coordinate>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ExploredSet {
            members: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.members.contains(&coord)
    }

    /// Returns false if `coord` was already explored
    pub fn add(&mut self, coord: Coordinate) -> bool {
        if self.members.insert(coord) {
            self.order.push(coord);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Explored cells in expansion order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.order.iter().copied()
    }
}

/// Lowest priority ever enqueued per cell. Entries only ever decrease.
#[derive(Debug, Clone, Default)]
pub struct BestPriorityMap {
    best: HashMap<Coordinate, u32>,
}

impl BestPriorityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BestPriorityMap { best: HashMap::with_capacity(capacity) }
    }

    pub fn get(&self, coord: Coordinate) -> Option<u32> {
        self.best.get(&coord).copied()
    }

    /// Store `priority` if the cell has none yet or it is strictly lower
    pub fn record_if_better(&mut self, coord: Coordinate, priority: u32) -> bool {
        match self.best.entry(coord) {
            Entry::Occupied(entry) if *entry.get() <= priority => false,
            Entry::Occupied(mut entry) => {
                entry.insert(priority);
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(priority);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
