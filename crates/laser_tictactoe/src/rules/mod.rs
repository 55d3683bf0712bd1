//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! the engine so the laser resolution can re-run them on a cleared board.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{WinningLine, check_win, check_winner};
