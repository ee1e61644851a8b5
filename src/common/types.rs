//! Common types used throughout mazebot

use std::fmt;

use nalgebra::DMatrix;

/// Grid cell position as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    pub fn manhattan(&self, other: &Coordinate) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from(tuple: (usize, usize)) -> Self {
        Self { row: tuple.0, col: tuple.1 }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Kind of a maze cell as read from input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
    Start,
    Goal,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Wall),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => '#',
            Cell::Start => 'S',
            Cell::Goal => 'G',
        }
    }

    pub fn is_passable(self) -> bool {
        self != Cell::Wall
    }
}

/// Rendered cell of an observation frame.
///
/// `Path` and `Explored` are output-only markers and never appear in input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
    Start,
    Goal,
    Path,
    Explored,
}

impl Tile {
    pub fn to_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
            Tile::Path => 'X',
            Tile::Explored => 'E',
        }
    }

    /// Endpoint and wall tiles keep their marker when annotated
    pub fn is_fixed(self) -> bool {
        matches!(self, Tile::Wall | Tile::Start | Tile::Goal)
    }
}

impl From<Cell> for Tile {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Open => Tile::Open,
            Cell::Wall => Tile::Wall,
            Cell::Start => Tile::Start,
            Cell::Goal => Tile::Goal,
        }
    }
}

/// Matrix of rendered tiles, indexed by (row, col)
pub type TileMap = DMatrix<Tile>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_symmetric() {
        let a = Coordinate::new(1, 7);
        let b = Coordinate::new(4, 2);
        assert_eq!(a.manhattan(&b), 8);
        assert_eq!(b.manhattan(&a), 8);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_cell_char_codes() {
        for c in ['.', '#', 'S', 'G'] {
            assert_eq!(Cell::from_char(c).unwrap().to_char(), c);
        }
        assert_eq!(Cell::from_char('X'), None);
        assert_eq!(Cell::from_char('E'), None);
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Goal.is_passable());
    }

    #[test]
    fn test_tile_from_cell() {
        assert_eq!(Tile::from(Cell::Start).to_char(), 'S');
        assert_eq!(Tile::Path.to_char(), 'X');
        assert_eq!(Tile::Explored.to_char(), 'E');
        assert!(Tile::Goal.is_fixed());
        assert!(!Tile::Open.is_fixed());
    }
}
