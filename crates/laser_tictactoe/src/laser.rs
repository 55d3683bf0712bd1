//! Laser effect planning.
//!
//! A laser fires from the square just played and sweeps that square's row and
//! column. Every other marked square it crosses is cleared. Planning is pure:
//! the engine computes the plan when the laser fires and applies it later, in
//! [`GameEngine::resolve_laser`](crate::GameEngine::resolve_laser), once the
//! front end has shown the beam.

use super::{Board, GameStatus, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// A fired laser waiting to be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LaserEvent {
    /// Engine-unique identifier; stale identifiers are refused.
    id: u64,
    /// Square the laser fired from. Never cleared.
    trigger: Position,
    /// Row swept by the horizontal beam.
    row: usize,
    /// Column swept by the vertical beam.
    col: usize,
    /// Marked squares the beams will clear.
    cells_to_clear: BTreeSet<Position>,
}

impl LaserEvent {
    /// Plans a laser fired from `trigger` on `board`.
    #[instrument(skip(board))]
    pub fn plan(id: u64, board: &Board, trigger: Position) -> Self {
        let row = trigger.row();
        let col = trigger.col();
        let cells_to_clear = Position::in_row(row)
            .into_iter()
            .chain(Position::in_col(col))
            .filter(|pos| *pos != trigger && !board.is_empty(*pos))
            .collect();
        Self {
            id,
            trigger,
            row,
            col,
            cells_to_clear,
        }
    }

    /// Board indices the beams will clear, ascending.
    pub fn indices_to_clear(&self) -> Vec<usize> {
        self.cells_to_clear.iter().map(|p| p.to_index()).collect()
    }

    /// True if either beam passes over `pos`.
    pub fn sweeps(&self, pos: Position) -> bool {
        pos.row() == self.row || pos.col() == self.col
    }
}

/// What resolving a laser did.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct LaserResolution {
    /// Squares emptied by this call, ascending.
    cleared: Vec<Position>,
    /// Status after the post-clear win/draw check.
    final_status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(marks.chars()) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_plan_clears_column_when_row_empty() {
        // X O X / O X O / X _ _ after X takes 6.
        let board = board_from("XOXOXOX..");
        let event = LaserEvent::plan(1, &board, Position::BottomLeft);
        assert_eq!(*event.row(), 2);
        assert_eq!(*event.col(), 0);
        assert_eq!(event.indices_to_clear(), vec![0, 3]);
    }

    #[test]
    fn test_plan_never_includes_trigger() {
        let board = board_from("XXXXXXXXX");
        let event = LaserEvent::plan(1, &board, Position::Center);
        assert!(!event.cells_to_clear().contains(&Position::Center));
        assert_eq!(event.indices_to_clear(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_plan_on_lonely_mark_clears_nothing() {
        let board = board_from("....X....");
        let event = LaserEvent::plan(3, &board, Position::Center);
        assert!(event.cells_to_clear().is_empty());
        assert_eq!(*event.id(), 3);
    }

    #[test]
    fn test_sweeps_row_and_column_only() {
        let event = LaserEvent::plan(1, &Board::new(), Position::TopRight);
        assert!(event.sweeps(Position::TopLeft));
        assert!(event.sweeps(Position::BottomRight));
        assert!(!event.sweeps(Position::Center));
    }
}
