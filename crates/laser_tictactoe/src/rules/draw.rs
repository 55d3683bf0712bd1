//! Draw detection logic.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Only means a draw once [`check_win`](super::check_win) has come back empty
/// for the same board.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::super::win::check_win;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        check_draw(board) && check_win(board).is_none()
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        assert!(!check_draw(&board));
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(check_draw(&board));
        assert!(!is_draw(&board));
    }
}
