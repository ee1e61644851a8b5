//! Error types for mazebot

use thiserror::Error;

use crate::common::types::Coordinate;

/// Main error type for maze loading and search
#[derive(Error, Debug)]
pub enum MazeError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Size line missing, unparsable or zero
    #[error("Invalid maze size: {0:?}")]
    InvalidSize(String),

    /// Number of grid rows does not match the declared size
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// Row length does not match the declared size
    #[error("Row {row} has {found} cells, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },

    /// Character that is not a recognized cell code
    #[error("Unknown cell code {code:?} at {at}")]
    UnknownCell { code: char, at: Coordinate },

    /// No start or goal marker in the grid
    #[error("Missing marker {0:?}")]
    MissingMarker(char),

    /// Start or goal marker appears more than once
    #[error("Marker {marker:?} found at both {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Coordinate,
        second: Coordinate,
    },

    /// Coordinate outside the grid
    #[error("Coordinate {0} is out of bounds")]
    OutOfBounds(Coordinate),

    /// Endpoint placed on a wall
    #[error("Coordinate {0} is not passable")]
    NotPassable(Coordinate),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Frontier has no entries left to expand
    #[error("Frontier is empty")]
    EmptyFrontier,

    /// Goal is unreachable from start
    #[error("No path found")]
    NoPath,

    /// Visualization error
    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for maze operations
pub type MazeResult<T> = Result<T, MazeError>;
