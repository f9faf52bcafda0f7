use std::fmt::Write;
use sweeper_core::{Board, FieldState, Phase};

/// What the player gets to see for a cell, mines stay hidden until the game is over.
pub(crate) fn glyph(phase: Phase, state: FieldState) -> char {
    use FieldState::*;
    match (phase, state) {
        (_, ExplodedMine) => 'X',
        (Phase::Lost, HiddenMine | FlaggedMine) => '*',
        (_, Uncovered(0)) => '.',
        (_, Uncovered(count)) => char::from_digit(count.into(), 10).unwrap_or('?'),
        (Phase::Won, HiddenMine) | (_, Flagged | FlaggedMine) => 'F',
        (_, Covered | HiddenMine | OutOfBounds) => '#',
    }
}

/// Grid with column numbers on top and row numbers on the left.
pub(crate) fn board<F>(board: &Board<F>) -> String {
    let phase = board.phase();
    let mut out = String::from("    ");
    for column in 0..board.width() {
        let _ = write!(out, "{:>3}", column);
    }
    out.push('\n');

    for row in 0..board.height() {
        let _ = write!(out, "{:>3} ", row);
        for column in 0..board.width() {
            let _ = write!(out, "{:>3}", glyph(phase, board.cell_at((row, column))));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn status<F>(board: &Board<F>) -> String {
    match board.phase() {
        Phase::Running => format!(
            "Can you locate the {}{} mines?",
            board.mines_left(),
            if board.flag_count() > 0 { " remaining" } else { "" }
        ),
        Phase::Lost => "The game is over. You have lost!".into(),
        Phase::Won => "Well done! You win!".into(),
    }
}

pub(crate) fn restart_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Won => "Next level",
        Phase::Running | Phase::Lost => "Try again",
    }
}
