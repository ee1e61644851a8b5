//! Random maze generation

use itertools::iproduct;
use nalgebra::DMatrix;
use rand::Rng;

use crate::common::{Cell, Coordinate, MazeError, MazeResult};
use crate::utils::Grid;

/// Configuration for random mazes
#[derive(Debug, Clone)]
pub struct MazeGeneratorConfig {
    /// Number of rows and columns
    pub size: usize,
    /// Chance that a non-endpoint cell becomes a wall, in [0, 1]
    pub wall_probability: f64,
}

impl Default for MazeGeneratorConfig {
    fn default() -> Self {
        Self {
            size: 10,
            wall_probability: 0.3,
        }
    }
}

impl MazeGeneratorConfig {
    pub fn validate(&self) -> MazeResult<()> {
        if self.size == 0 {
            return Err(MazeError::InvalidParameter("size must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(MazeError::InvalidParameter(format!(
                "wall probability {} is outside [0, 1]",
                self.wall_probability
            )));
        }
        Ok(())
    }
}

/// Generate a maze with start in the top-left and goal in the bottom-right
/// corner. Walls are placed independently, so the goal is not guaranteed to
/// be reachable.
pub fn generate_maze<R: Rng>(config: &MazeGeneratorConfig, rng: &mut R) -> MazeResult<Grid> {
    config.validate()?;

    let n = config.size;
    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(n - 1, n - 1);

    let mut cells = DMatrix::from_element(n, n, Cell::Open);
    for (row, col) in iproduct!(0..n, 0..n) {
        if rng.gen_bool(config.wall_probability) {
            cells[(row, col)] = Cell::Wall;
        }
    }
    cells[(start.row, start.col)] = Cell::Start;
    if goal != start {
        cells[(goal.row, goal.col)] = Cell::Goal;
    }

    log::debug!(
        "Generated {}x{} maze with {} walls",
        n,
        n,
        cells.iter().filter(|c| **c == Cell::Wall).count()
    );

    Grid::new(cells, start, goal)
}
