use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned copy of everything a presentation layer reads from a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: Coord,
    pub height: Coord,
    pub mine_count: CellCount,
    pub flag_count: CellCount,
    pub phase: Phase,
    pub revision: u64,
    pub cells: Array2<FieldState>,
}

impl BoardSnapshot {
    pub fn from_board<F>(board: &Board<F>) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            mine_count: board.mine_count(),
            flag_count: board.flag_count(),
            phase: board.phase(),
            revision: board.revision(),
            cells: board.field().clone(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> FieldState {
        if in_bounds(coords, (self.height, self.width)) {
            self.cells[coords.to_nd_index()]
        } else {
            FieldState::OutOfBounds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_matches_board() {
        let mut board = Board::from_mine_coords(4, 3, &[(2, 3)]).unwrap();
        board.flag_mine((2, 3));
        board.uncover((0, 0));

        let snapshot = board.snapshot();

        assert_eq!(snapshot.flag_count, 1);
        assert_eq!(snapshot.phase, board.phase());
        for (coords, state) in board.iter_cells() {
            assert_eq!(snapshot.cell_at(coords), state);
        }
        assert_eq!(snapshot.cell_at((3, 0)), FieldState::OutOfBounds);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut board = Board::from_mine_coords(3, 3, &[(1, 1)]).unwrap();
        board.uncover((1, 1));

        let json = serde_json::to_value(board.snapshot()).unwrap();

        assert_eq!(json["phase"], "Lost");
        assert_eq!(json["mine_count"], 1);
        assert_eq!(json["cells"]["dim"], serde_json::json!([3, 3]));
        assert_eq!(json["cells"]["data"][4], "ExplodedMine");
        assert_eq!(json["cells"]["data"][0], "Covered");
    }
}
