use core::fmt;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Running -> Won
/// - Running -> Lost
/// - any -> Running, only through a successful reset
/// - any -> Lost, through a reset with an invalid mine count
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Running
    }
}

/// The game state machine: owns the grid, places the mines and resolves player actions.
///
/// Every operation is synchronous and takes `&mut self`; sharing a board between threads requires external locking.
#[derive(Clone, Debug)]
pub struct Board<F = Silent> {
    width: Coord,
    height: Coord,
    field: Array2<FieldState>,
    mine_count: CellCount,
    flag_count: CellCount,
    phase: Phase,
    revision: u64,
    rng: SmallRng,
    feedback: F,
}

impl Board<Silent> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_feedback(config, None, Silent)
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_feedback(config, Some(seed), Silent)
    }

    /// Builds a running board with mines at exactly the given `(row, column)` positions.
    ///
    /// Unlike [`Board::reset`] this does not enforce the mine density, which makes degenerate layouts (including
    /// mine-free boards) available for scripted scenarios.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if !(1..=MAX_SIDE).contains(&width) || !(1..=MAX_SIDE).contains(&height) {
            return Err(GameError::InvalidSize { width, height });
        }

        let mut field = Array2::from_elem(shape(width, height), FieldState::Covered);
        for &coords in mine_coords {
            if !in_bounds(coords, (height, width)) {
                return Err(GameError::InvalidCoords(coords));
            }
            field[coords.to_nd_index()] = FieldState::HiddenMine;
        }
        let mine_count = field.iter().filter(|cell| cell.has_mine()).count() as CellCount;

        Ok(Self {
            width,
            height,
            field,
            mine_count,
            flag_count: 0,
            phase: Phase::Running,
            revision: 0,
            rng: SmallRng::from_entropy(),
            feedback: Silent,
        })
    }
}

impl<F: Feedback> Board<F> {
    /// Creates a board and performs the initial reset. Side lengths are clamped like [`GameConfig::new`]; an invalid
    /// mine count leaves a fully covered board in the [`Phase::Lost`] phase.
    pub fn with_feedback(config: GameConfig, seed: Option<u64>, feedback: F) -> Self {
        let GameConfig {
            width,
            height,
            mines,
        } = GameConfig::new(config.width, config.height, config.mines);
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut board = Self {
            width,
            height,
            field: Array2::from_elem(shape(width, height), FieldState::Covered),
            mine_count: mines,
            flag_count: 0,
            phase: Phase::Running,
            revision: 0,
            rng,
            feedback,
        };
        board.reset(None);
        board
    }

    /// Keeps the board state and hands cues to `feedback` from now on.
    pub fn replace_feedback<G: Feedback>(self, feedback: G) -> Board<G> {
        Board {
            width: self.width,
            height: self.height,
            field: self.field,
            mine_count: self.mine_count,
            flag_count: self.flag_count,
            phase: self.phase,
            revision: self.revision,
            rng: self.rng,
            feedback,
        }
    }

    /// Starts a new game with `mines` mines, or the current count when `None`.
    ///
    /// A count outside `1..width*height/4` ends the current game as lost and leaves grid and mine count untouched.
    pub fn reset(&mut self, mines: Option<CellCount>) {
        let mines = mines.unwrap_or(self.mine_count);
        let config = GameConfig::new_unchecked(self.width, self.height, mines);
        if !config.accepts_mines(mines) {
            log::warn!(
                "Refusing to place {} mines on a {}x{} board (limit {}), marking game as lost",
                mines,
                self.width,
                self.height,
                config.mine_limit()
            );
            self.set_phase(Phase::Lost);
            return;
        }

        self.mine_count = mines;
        self.field.fill(FieldState::Covered);

        let mut placed = 0;
        while placed < mines {
            let coords = (
                self.rng.gen_range(0..self.height),
                self.rng.gen_range(0..self.width),
            );
            let cell = &mut self.field[coords.to_nd_index()];
            if !cell.has_mine() {
                *cell = FieldState::HiddenMine;
                placed += 1;
            }
        }

        self.flag_count = 0;
        self.phase = Phase::Running;
        self.touch();
        log::debug!(
            "New game on a {}x{} board with {} mines",
            self.width,
            self.height,
            mines
        );

        self.feedback.stop_all();
        self.feedback.prepare(Cue::Explosion);
    }

    /// Restarts after a game: a won game advances to the next level with [`LEVEL_MINE_STEP`] more mines, otherwise
    /// the mine count is kept.
    pub fn restart(&mut self) {
        let mines = match self.phase {
            Phase::Won => self.mine_count.saturating_add(LEVEL_MINE_STEP),
            Phase::Running | Phase::Lost => self.mine_count,
        };
        self.reset(Some(mines));
    }

    /// Reveals the cell at `coords` and returns its new state.
    ///
    /// Out of bounds coordinates or a finished game yield [`FieldState::OutOfBounds`] without touching anything.
    /// Revealing a cell without neighbouring mines also reveals the connected covered area around it.
    pub fn uncover(&mut self, coords: Coord2) -> FieldState {
        if !self.phase.is_running() || !self.contains(coords) {
            return FieldState::OutOfBounds;
        }

        let state = self.uncover_cell(coords);
        if state == FieldState::Uncovered(0) {
            self.flood_fill(coords);
        }
        self.check_win();

        state
    }

    /// Toggles a flag at `coords`, returns `true` only when a flag was placed.
    ///
    /// No more flags than mines can be placed; removing a flag is always possible.
    pub fn flag_mine(&mut self, coords: Coord2) -> bool {
        use FieldState::*;

        if !self.phase.is_running() || !self.contains(coords) {
            return false;
        }

        let flags_left = self.flag_count < self.mine_count;
        let index = coords.to_nd_index();
        let next = match self.field[index] {
            Covered if flags_left => Some(Flagged),
            HiddenMine if flags_left => Some(FlaggedMine),
            Flagged => Some(Covered),
            FlaggedMine => Some(HiddenMine),
            Covered | HiddenMine | Uncovered(_) | ExplodedMine | OutOfBounds => None,
        };

        let placed = match next {
            Some(state) => {
                self.field[index] = state;
                self.touch();
                if state.is_flagged() {
                    self.flag_count += 1;
                    true
                } else {
                    self.flag_count -= 1;
                    false
                }
            }
            None => false,
        };
        self.check_win();

        placed
    }

    fn uncover_cell(&mut self, coords: Coord2) -> FieldState {
        let old_state = self.field[coords.to_nd_index()];
        let state = if old_state.has_mine() {
            log::debug!("Mine hit at {coords:?}");
            self.set_phase(Phase::Lost);
            self.feedback.play(Cue::Explosion);
            FieldState::ExplodedMine
        } else {
            FieldState::Uncovered(self.neighbor_mine_count(coords))
        };

        self.field[coords.to_nd_index()] = state;
        // a flag on a safe cell is dropped when it gets revealed, flagged mines explode instead
        if old_state == FieldState::Flagged {
            self.flag_count -= 1;
        }
        self.touch();

        state
    }

    fn flood_fill(&mut self, origin: Coord2) {
        let mut pending: Vec<Coord2> = self.covered_neighbors(origin).collect();
        let mut revealed = 0usize;

        while let Some(coords) = pending.pop() {
            // may have been queued more than once
            if self.field[coords.to_nd_index()] != FieldState::Covered {
                continue;
            }

            revealed += 1;
            if self.uncover_cell(coords) == FieldState::Uncovered(0) {
                pending.extend(self.covered_neighbors(coords));
            }
        }

        log::debug!("Flood fill from {origin:?} revealed {revealed} more cells");
    }

    /// Won when nothing is left covered and either every flag counts as a mine or the flags plus the untouched mines
    /// add up to the mine count.
    fn check_win(&mut self) {
        if !self.phase.is_running() {
            return;
        }

        let mut hidden_mines: CellCount = 0;
        for cell in self.field.iter() {
            match cell {
                FieldState::Covered => return,
                FieldState::HiddenMine => hidden_mines += 1,
                _ => {}
            }
        }

        if self.flag_count == self.mine_count || hidden_mines + self.flag_count == self.mine_count {
            self.set_phase(Phase::Won);
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::info!("Game phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            self.touch();
        }
    }
}

impl<F> Board<F> {
    /// State at `(row, column)`, [`FieldState::OutOfBounds`] outside the board.
    pub fn cell_at(&self, coords: Coord2) -> FieldState {
        if self.contains(coords) {
            self.field[coords.to_nd_index()]
        } else {
            FieldState::OutOfBounds
        }
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.bounds())
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    /// `(height, width)`, the exclusive upper bound of `(row, column)`.
    pub fn bounds(&self) -> Bounds {
        (self.height, self.width)
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.width, self.height, self.mine_count)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn mines_left(&self) -> CellCount {
        self.mine_count.saturating_sub(self.flag_count)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Increases with every observable change, presentation layers can compare it to decide whether to redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The grid indexed by `[row, column]`.
    pub fn field(&self) -> &Array2<FieldState> {
        &self.field
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, FieldState)> + '_ {
        self.field
            .indexed_iter()
            .map(|((row, column), &state)| ((row as Coord, column as Coord), state))
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }

    fn neighbor_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight
        NeighborIter::new(coords, self.bounds())
            .filter(|&pos| self.cell_at(pos).has_mine())
            .count() as u8
    }

    fn covered_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        NeighborIter::new(coords, self.bounds())
            .filter(|&pos| self.field[pos.to_nd_index()] == FieldState::Covered)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// One line per row, engine glyphs.
impl<F> fmt::Display for Board<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.field.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn shape(width: Coord, height: Coord) -> (usize, usize) {
    (height as usize, width as usize)
}
