use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
    #[error("Invalid board size {width}x{height}")]
    InvalidSize { width: Coord, height: Coord },
    #[error("Invalid mine count {requested}, must be between 1 and {max}")]
    InvalidMineCount { requested: CellCount, max: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
