use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("no path between entrance and exit")]
    NoPathFound, // Entrance and exit are not connected
    #[error("invalid maze size {0}: must be odd and at least 3")]
    InvalidSize(usize),
    #[error("grid is not square: row {row} has {len} cells, expected {rows}")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}
