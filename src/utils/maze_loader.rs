//! Maze text format
//!
//! The first non-blank line holds the size N, followed by N rows of N cell
//! codes (`.` open, `#` wall, `S` start, `G` goal):
//!
//! ```text
//! 3
//! S..
//! .#.
//! ..G
//! ```

use std::fs;
use std::path::Path;

use nalgebra::DMatrix;

use crate::common::{Cell, Coordinate, MazeError, MazeResult};
use crate::utils::Grid;

/// File read when no maze path is given
pub const DEFAULT_MAZE_FILE: &str = "maze.txt";

/// Parse a maze from its text form, rejecting any malformed input
pub fn parse_maze(text: &str) -> MazeResult<Grid> {
    let mut lines = text.lines();

    let size_line = lines
        .by_ref()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| MazeError::InvalidSize(String::new()))?;
    let size: usize = size_line
        .parse()
        .map_err(|_| MazeError::InvalidSize(size_line.to_string()))?;
    if size == 0 {
        return Err(MazeError::InvalidSize(size_line.to_string()));
    }

    let mut rows: Vec<&str> = lines.map(str::trim_end).collect();
    while rows.last().map_or(false, |row| row.is_empty()) {
        rows.pop();
    }
    if rows.len() != size {
        return Err(MazeError::RowCount { expected: size, found: rows.len() });
    }

    let mut cells = Vec::with_capacity(size * size);
    for (row, line) in rows.iter().enumerate() {
        let width = line.chars().count();
        if width != size {
            return Err(MazeError::RowWidth { row, expected: size, found: width });
        }
        for (col, code) in line.chars().enumerate() {
            let cell = Cell::from_char(code).ok_or(MazeError::UnknownCell {
                code,
                at: Coordinate::new(row, col),
            })?;
            cells.push(cell);
        }
    }

    Grid::from_markers(DMatrix::from_row_slice(size, size, &cells))
}

/// Read and parse a maze file
pub fn load_maze<P: AsRef<Path>>(path: P) -> MazeResult<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = parse_maze(&text)?;
    log::info!(
        "Loaded {}x{} maze from {}: start {}, goal {}",
        grid.size(),
        grid.size(),
        path.display(),
        grid.start(),
        grid.goal()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_maze() {
        let grid = parse_maze("3\nS..\n.#.\n..G\n").unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.start(), Coordinate::new(0, 0));
        assert_eq!(grid.goal(), Coordinate::new(2, 2));
        assert_eq!(grid.cell(Coordinate::new(1, 1)), Some(Cell::Wall));
    }

    #[test]
    fn test_parse_tolerates_trailing_whitespace() {
        let grid = parse_maze("  2  \r\nS. \r\n#G\r\n\n\n").unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.goal(), Coordinate::new(1, 1));
    }

    #[test]
    fn test_parse_invalid_size() {
        assert!(matches!(parse_maze(""), Err(MazeError::InvalidSize(_))));
        assert!(matches!(parse_maze("three\nS.G"), Err(MazeError::InvalidSize(_))));
        assert!(matches!(parse_maze("0\n"), Err(MazeError::InvalidSize(_))));
    }

    #[test]
    fn test_parse_row_count_mismatch() {
        match parse_maze("3\nS..\n..G\n") {
            Err(MazeError::RowCount { expected, found }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_maze("2\nS.\n.G\n..\n"),
            Err(MazeError::RowCount { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn test_parse_row_width_mismatch() {
        assert!(matches!(
            parse_maze("3\nS..\n.#\n..G\n"),
            Err(MazeError::RowWidth { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_parse_unknown_code() {
        match parse_maze("2\nSX\n.G\n") {
            Err(MazeError::UnknownCell { code, at }) => {
                assert_eq!(code, 'X');
                assert_eq!(at, Coordinate::new(0, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_markers() {
        assert!(matches!(parse_maze("2\n..\n.G\n"), Err(MazeError::MissingMarker('S'))));
        assert!(matches!(parse_maze("2\nS.\n..\n"), Err(MazeError::MissingMarker('G'))));
        assert!(matches!(
            parse_maze("2\nSS\n.G\n"),
            Err(MazeError::DuplicateMarker { marker: 'S', .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_maze("definitely/not/here/maze.txt");
        assert!(matches!(result, Err(MazeError::Io(_))));
    }

    #[test]
    fn test_load_maze_file() {
        let path = std::env::temp_dir().join(format!("mazebot_load_{}.txt", std::process::id()));
        fs::write(&path, "2\nS#\n.G\n").unwrap();
        let grid = load_maze(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(grid.to_string(), "S#\n.G\n");
    }
}
