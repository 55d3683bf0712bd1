//! Laser tic-tac-toe game logic.
//!
//! Classic 3x3 tic-tac-toe with one twist: after a move that does not end
//! the game, a laser may fire from the square just played and clear every
//! other mark in its row and column.
//!
//! # Example
//!
//! ```
//! use laser_tictactoe::{EngineConfig, GameEngine, GameStatus};
//!
//! let mut game = GameEngine::new(EngineConfig::default().with_seed(7));
//! let outcome = game.apply_move(4).expect("center is free");
//! if let Some(laser) = outcome.laser() {
//!     // Animate the beams, then acknowledge.
//!     game.resolve_laser(laser).expect("laser is pending");
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod engine;
pub mod invariants;
mod laser;
mod position;
mod rng;
pub mod rules;
mod types;

pub use action::{IllegalMove, LaserError, Move};
pub use config::{DEFAULT_LASER_PROBABILITY, EngineConfig, InvalidConfig, WinAttribution};
pub use contracts::{GameActive, InRange, LegalMove, NoPendingLaser, SquareIsEmpty};
pub use engine::{GameEngine, MoveOutcome};
pub use laser::{LaserEvent, LaserResolution};
pub use position::Position;
pub use rng::GameRng;
pub use rules::{WinningLine, check_draw, check_win, check_winner};
pub use types::{Board, GameStatus, Player, Square};
