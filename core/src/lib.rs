//! Game state engine for a single-player Minesweeper.
//!
//! A [`Board`] owns the grid, places the mines and turns reveal and flag actions into state transitions. Invalid input
//! never fails: out of bounds queries answer [`FieldState::OutOfBounds`], actions on a finished game do nothing.

pub use board::*;
pub use config::*;
pub use error::*;
pub use feedback::*;
pub use field::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod config;
mod error;
mod feedback;
mod field;
mod snapshot;
mod types;
