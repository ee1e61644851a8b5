//! Observations emitted by the search and the frames rendered from them

use std::fmt;

use crate::common::{Coordinate, Reporter, Tile, TileMap};
use crate::path_planning::{ExploredSet, NodeArena, NodeId, SearchNode};
use crate::utils::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationKind {
    /// Start cell marked explored, nothing expanded yet
    Initial,
    /// A new cell was expanded
    Progress,
    /// Search terminated
    Final { found: bool },
}

/// Borrowed view of the search state handed to reporters.
///
/// Nothing is copied until a reporter asks for `path()` or `frame()`.
pub struct Observation<'a> {
    kind: ObservationKind,
    grid: &'a Grid,
    explored: &'a ExploredSet,
    nodes: &'a NodeArena,
    node: NodeId,
}

impl<'a> Observation<'a> {
    pub fn new(
        kind: ObservationKind,
        grid: &'a Grid,
        explored: &'a ExploredSet,
        nodes: &'a NodeArena,
        node: NodeId,
    ) -> Self {
        Observation { kind, grid, explored, nodes, node }
    }

    pub fn kind(&self) -> ObservationKind {
        self.kind
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn explored(&self) -> &'a ExploredSet {
        self.explored
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Most recently expanded node
    pub fn node(&self) -> &'a SearchNode {
        &self.nodes[self.node]
    }

    /// Route from the start to the current node; empty for a failed search
    pub fn path(&self) -> Vec<Coordinate> {
        match self.kind {
            ObservationKind::Final { found: false } => Vec::new(),
            _ => self.nodes.path_to(self.node),
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::annotate(
            self.kind,
            self.grid,
            self.explored.iter(),
            &self.path(),
            self.explored_count(),
        )
    }
}

/// Owned snapshot of the maze with explored and path cells marked
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub kind: ObservationKind,
    pub tiles: TileMap,
    pub path: Vec<Coordinate>,
    pub explored_count: usize,
}

impl Frame {
    /// Mark `explored` cells `E` and `path` cells `X`. Walls and the start
    /// and goal markers are left untouched.
    pub fn annotate<I>(
        kind: ObservationKind,
        grid: &Grid,
        explored: I,
        path: &[Coordinate],
        explored_count: usize,
    ) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut tiles = grid.tile_map();
        for coord in explored {
            Self::mark(&mut tiles, coord, Tile::Explored);
        }
        for &coord in path {
            Self::mark(&mut tiles, coord, Tile::Path);
        }

        Frame {
            kind,
            tiles,
            path: path.to_vec(),
            explored_count,
        }
    }

    fn mark(tiles: &mut TileMap, coord: Coordinate, tile: Tile) {
        let slot = &mut tiles[(coord.row, coord.col)];
        if !slot.is_fixed() {
            *slot = tile;
        }
    }

    pub fn size(&self) -> usize {
        self.tiles.nrows()
    }

    pub fn tile(&self, coord: Coordinate) -> Tile {
        self.tiles[(coord.row, coord.col)]
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.tiles.nrows() {
            for col in 0..self.tiles.ncols() {
                write!(f, "{} ", self.tiles[(row, col)].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reporter keeping every frame and explored-count update, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub frames: Vec<Frame>,
    pub counts: Vec<usize>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Reporter for RecordingReporter {
    fn on_observation(&mut self, observation: &Observation<'_>) {
        self.frames.push(observation.frame());
    }

    fn on_explored_count_changed(&mut self, count: usize) {
        self.counts.push(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_maze;

    #[test]
    fn test_annotate_keeps_fixed_tiles() {
        let grid = parse_maze("3\nS..\n.#.\n..G\n").unwrap();
        let explored = vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(0, 1)];
        let path = vec![Coordinate::new(0, 0), Coordinate::new(1, 0)];
        let frame = Frame::annotate(ObservationKind::Progress, &grid, explored, &path, 3);

        assert_eq!(frame.tile(Coordinate::new(0, 0)), Tile::Start);
        assert_eq!(frame.tile(Coordinate::new(1, 0)), Tile::Path);
        assert_eq!(frame.tile(Coordinate::new(0, 1)), Tile::Explored);
        assert_eq!(frame.tile(Coordinate::new(1, 1)), Tile::Wall);
        assert_eq!(frame.tile(Coordinate::new(2, 2)), Tile::Goal);
        assert_eq!(frame.count(Tile::Open), 4);
        assert_eq!(frame.explored_count, 3);
    }

    #[test]
    fn test_frame_display() {
        let grid = parse_maze("2\nS.\n#G\n").unwrap();
        let frame = Frame::annotate(
            ObservationKind::Final { found: true },
            &grid,
            vec![Coordinate::new(0, 1)],
            &[Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 1)],
            3,
        );
        assert_eq!(frame.to_string(), "S X \n# G \n");
    }

    #[test]
    fn test_observation_path_hidden_on_failure() {
        let grid = parse_maze("2\nS#\n#G\n").unwrap();
        let mut explored = ExploredSet::new();
        explored.add(grid.start());
        let mut nodes = NodeArena::new();
        let root = nodes.push(SearchNode::new(grid.start(), 0, 2, None));

        let progress = Observation::new(ObservationKind::Initial, &grid, &explored, &nodes, root);
        assert_eq!(progress.path(), vec![grid.start()]);
        assert_eq!(progress.explored_count(), 1);

        let failed = Observation::new(ObservationKind::Final { found: false }, &grid, &explored, &nodes, root);
        assert!(failed.path().is_empty());
        let frame = failed.frame();
        assert_eq!(frame.count(Tile::Path), 0);
        assert_eq!(frame.kind, ObservationKind::Final { found: false });
    }
}
