//! Error types for board construction and path queries.
//!
//! "No path" and "no pair" are ordinary `None` results, not errors. The
//! variants here are reserved for inputs that break the caller contract.

/// Errors raised while building or parsing a [`Board`](crate::engine::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board description has no rows")]
    NoRows,

    #[error("row {row} has {found} cells (expected {expected})")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedChar { ch: char, row: usize, col: usize },

    #[error("board has {found} cells, a {width}x{height} board needs {expected}")]
    CellCount {
        width: usize,
        height: usize,
        found: usize,
        expected: usize,
    },

    #[error("level needs {needed} obstacles but the board only has {cells} cells")]
    TooManyObstacles { needed: usize, cells: usize },

    #[error("{kinds} tile kinds requested, the palette has 1 to {max}")]
    KindCount { kinds: usize, max: usize },
}

/// Contract violations reported by path queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("endpoints must be distinct, both are ({x}, {y})")]
    SameEndpoints { x: usize, y: usize },

    #[error("cell ({x}, {y}) holds an obstacle and cannot be an endpoint")]
    ObstacleEndpoint { x: usize, y: usize },

    #[error("cell ({x}, {y}) does not hold a tile")]
    NotATile { x: usize, y: usize },
}
