//! mazebot - A* shortest path search on grid mazes
//!
//! This crate loads square character mazes, finds an optimal 4-connected
//! route from `S` to `G` with A* and a Manhattan heuristic, and reports
//! every expansion to pluggable console, plot or recording reporters.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Cell, Coordinate, Tile, TileMap};
pub use common::{Heuristic, Manhattan, NullReporter, PathPlanner, Reporter};
pub use common::{MazeError, MazeResult};
pub use path_planning::{AStarConfig, AStarPlanner, AStarSearch, SearchOutcome, SearchState};
pub use utils::{Grid, Frame, Observation, ObservationKind, RecordingReporter};
