use core::fmt;
use serde::{Deserialize, Serialize};

/// State of a single position on the board, as stored by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldState {
    /// Returned for queries outside the board, never stored.
    OutOfBounds,
    Covered,
    HiddenMine,
    /// Revealed safe cell with the number of mines among its eight neighbours.
    Uncovered(u8),
    Flagged,
    FlaggedMine,
    /// The mine that ended the game.
    ExplodedMine,
}

impl FieldState {
    pub const fn is_uncovered(self) -> bool {
        use FieldState::*;
        match self {
            Uncovered(_) | ExplodedMine => true,
            OutOfBounds | Covered | HiddenMine | Flagged | FlaggedMine => false,
        }
    }

    pub const fn has_mine(self) -> bool {
        use FieldState::*;
        match self {
            HiddenMine | FlaggedMine | ExplodedMine => true,
            OutOfBounds | Covered | Uncovered(_) | Flagged => false,
        }
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged | Self::FlaggedMine)
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::Covered
    }
}

/// Engine-level glyphs, mines included. Not meant for players.
impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FieldState::*;
        match self {
            OutOfBounds => f.write_str("?"),
            Covered => f.write_str("_"),
            HiddenMine => f.write_str("*"),
            Uncovered(0) => f.write_str(" "),
            Uncovered(count) => write!(f, "{count}"),
            Flagged => f.write_str("F"),
            FlaggedMine => f.write_str("M"),
            ExplodedMine => f.write_str("X"),
        }
    }
}
