//! Win detection logic.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that win the game.
///
/// Declaration order is the scan order: rows, then columns, then diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum WinningLine {
    /// Row 0: 0, 1, 2
    #[display("top row")]
    TopRow,
    /// Row 1: 3, 4, 5
    #[display("middle row")]
    MiddleRow,
    /// Row 2: 6, 7, 8
    #[display("bottom row")]
    BottomRow,
    /// Column 0: 0, 3, 6
    #[display("left column")]
    LeftColumn,
    /// Column 1: 1, 4, 7
    #[display("center column")]
    CenterColumn,
    /// Column 2: 2, 5, 8
    #[display("right column")]
    RightColumn,
    /// Diagonal ↘: 0, 4, 8
    #[display("falling diagonal")]
    FallingDiagonal,
    /// Diagonal ↙: 2, 4, 6
    #[display("rising diagonal")]
    RisingDiagonal,
}

impl WinningLine {
    /// All lines in scan order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::FallingDiagonal,
        WinningLine::RisingDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinningLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinningLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinningLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinningLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinningLine::FallingDiagonal => [TopLeft, Center, BottomRight],
            WinningLine::RisingDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// True if the line passes through `pos`.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// The player holding all three squares, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(player),
            _ => None,
        }
    }
}

/// Returns the first completed line in scan order, if any.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    check_win(board).and_then(|line| line.owner(board))
}
