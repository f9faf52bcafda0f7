use serde::{Deserialize, Serialize};

use crate::*;

/// Largest accepted side length, keeps `width * height` comfortably inside [`CellCount`].
pub const MAX_SIDE: Coord = 255;

/// Mines added to the board when restarting after a win.
pub const LEVEL_MINE_STEP: CellCount = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Clamps the side lengths into `1..=MAX_SIDE`. The mine count is kept as is, an out of range count is only
    /// rejected when the board is reset.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Self {
        let width = width.clamp(1, MAX_SIDE);
        let height = height.clamp(1, MAX_SIDE);
        Self::new_unchecked(width, height, mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Highest mine count that passes the density check: strictly less than a quarter of the cells.
    pub const fn mine_limit(&self) -> CellCount {
        (self.total_cells() / 4).saturating_sub(1)
    }

    pub const fn accepts_mines(&self, mines: CellCount) -> bool {
        mines > 0 && mines < self.total_cells() / 4
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SIDE).contains(&self.width) || !(1..=MAX_SIDE).contains(&self.height) {
            return Err(GameError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        if !self.accepts_mines(self.mines) {
            return Err(GameError::InvalidMineCount {
                requested: self.mines,
                max: self.mine_limit(),
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 15, 5)
    }
}
