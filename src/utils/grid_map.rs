//! Immutable maze grid backed by a square `DMatrix<Cell>`

use std::fmt;

use itertools::iproduct;
use nalgebra::DMatrix;

use crate::common::{Cell, Coordinate, MazeError, MazeResult, TileMap};

/// Row/column offsets in expansion order: up, down, left, right
const MOTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: DMatrix<Cell>,
    start: Coordinate,
    goal: Coordinate,
}

impl Grid {
    /// Build a grid with explicit endpoints.
    ///
    /// The matrix must be square and non-empty; both endpoints must be in
    /// bounds and passable. Start and goal may coincide.
    pub fn new(cells: DMatrix<Cell>, start: Coordinate, goal: Coordinate) -> MazeResult<Self> {
        if cells.nrows() == 0 || cells.nrows() != cells.ncols() {
            return Err(MazeError::InvalidParameter(format!(
                "grid must be square and non-empty, got {}x{}",
                cells.nrows(),
                cells.ncols()
            )));
        }

        let grid = Grid { cells, start, goal };
        for endpoint in [start, goal] {
            if !grid.checked_cell(endpoint)?.is_passable() {
                return Err(MazeError::NotPassable(endpoint));
            }
        }
        Ok(grid)
    }

    /// Build a grid whose endpoints are its single `S` and `G` cells
    pub fn from_markers(cells: DMatrix<Cell>) -> MazeResult<Self> {
        let start = Self::find_marker(&cells, Cell::Start)?;
        let goal = Self::find_marker(&cells, Cell::Goal)?;
        Self::new(cells, start, goal)
    }

    fn find_marker(cells: &DMatrix<Cell>, marker: Cell) -> MazeResult<Coordinate> {
        let mut found: Option<Coordinate> = None;
        for (row, col) in iproduct!(0..cells.nrows(), 0..cells.ncols()) {
            if cells[(row, col)] != marker {
                continue;
            }
            let here = Coordinate::new(row, col);
            if let Some(first) = found {
                return Err(MazeError::DuplicateMarker {
                    marker: marker.to_char(),
                    first,
                    second: here,
                });
            }
            found = Some(here);
        }
        found.ok_or(MazeError::MissingMarker(marker.to_char()))
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    pub fn cells(&self) -> &DMatrix<Cell> {
        &self.cells
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.size() && coord.col < self.size()
    }

    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[(coord.row, coord.col)])
        } else {
            None
        }
    }

    pub fn checked_cell(&self, coord: Coordinate) -> MazeResult<Cell> {
        self.cell(coord).ok_or(MazeError::OutOfBounds(coord))
    }

    /// False for walls and for anything outside the grid
    pub fn is_passable(&self, coord: Coordinate) -> bool {
        self.cell(coord).map_or(false, Cell::is_passable)
    }

    /// Passable orthogonal neighbors in the order up, down, left, right
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        MOTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = coord.row.checked_add_signed(dr)?;
            let col = coord.col.checked_add_signed(dc)?;
            let next = Coordinate::new(row, col);
            self.is_passable(next).then_some(next)
        })
    }

    /// Cells converted to tiles, the base of every frame
    pub fn tile_map(&self) -> TileMap {
        self.cells.map(Into::into)
    }

    /// Number of passable cells
    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                write!(f, "{}", self.cells[(row, col)].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_cells() -> DMatrix<Cell> {
        // S . .
        // . # .
        // . . G
        DMatrix::from_row_slice(
            3,
            3,
            &[
                Cell::Start, Cell::Open, Cell::Open,
                Cell::Open, Cell::Wall, Cell::Open,
                Cell::Open, Cell::Open, Cell::Goal,
            ],
        )
    }

    #[test]
    fn test_from_markers() {
        let grid = Grid::from_markers(small_cells()).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.start(), Coordinate::new(0, 0));
        assert_eq!(grid.goal(), Coordinate::new(2, 2));
        assert_eq!(grid.open_cells(), 8);
    }

    #[test]
    fn test_missing_and_duplicate_markers() {
        let mut cells = small_cells();
        cells[(2, 2)] = Cell::Open;
        assert!(matches!(Grid::from_markers(cells), Err(MazeError::MissingMarker('G'))));

        let mut cells = small_cells();
        cells[(1, 0)] = Cell::Start;
        match Grid::from_markers(cells) {
            Err(MazeError::DuplicateMarker { marker, first, second }) => {
                assert_eq!(marker, 'S');
                assert_eq!(first, Coordinate::new(0, 0));
                assert_eq!(second, Coordinate::new(1, 0));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_bad_endpoints() {
        let result = Grid::new(small_cells(), Coordinate::new(1, 1), Coordinate::new(2, 2));
        assert!(matches!(result, Err(MazeError::NotPassable(_))));

        let result = Grid::new(small_cells(), Coordinate::new(0, 0), Coordinate::new(3, 0));
        assert!(matches!(result, Err(MazeError::OutOfBounds(_))));

        let result = Grid::new(DMatrix::from_element(2, 3, Cell::Open), Coordinate::new(0, 0), Coordinate::new(1, 1));
        assert!(matches!(result, Err(MazeError::InvalidParameter(_))));
    }

    #[test]
    fn test_is_passable() {
        let grid = Grid::from_markers(small_cells()).unwrap();
        assert!(grid.is_passable(Coordinate::new(0, 1)));
        assert!(!grid.is_passable(Coordinate::new(1, 1)));
        assert!(!grid.is_passable(Coordinate::new(3, 0)));
        assert!(!grid.is_passable(Coordinate::new(0, 3)));
        assert!(grid.checked_cell(Coordinate::new(5, 5)).is_err());
    }

    #[test]
    fn test_neighbors_order() {
        let grid = Grid::new(
            DMatrix::from_element(3, 3, Cell::Open),
            Coordinate::new(0, 0),
            Coordinate::new(2, 2),
        )
        .unwrap();

        let center: Vec<_> = grid.neighbors(Coordinate::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
            ]
        );

        let corner: Vec<_> = grid.neighbors(Coordinate::new(0, 0)).collect();
        assert_eq!(corner, vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]);
    }

    #[test]
    fn test_neighbors_skip_walls() {
        let grid = Grid::from_markers(small_cells()).unwrap();
        let around: Vec<_> = grid.neighbors(Coordinate::new(0, 1)).collect();
        assert_eq!(around, vec![Coordinate::new(0, 0), Coordinate::new(0, 2)]);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_markers(small_cells()).unwrap();
        assert_eq!(grid.to_string(), "S..\n.#.\n..G\n");
    }
}
