//! Move preconditions and postcondition checks.
//!
//! Preconditions are checked on every move and turn into [`IllegalMove`].
//! Postconditions are the invariant set, asserted in debug builds.

use super::action::IllegalMove;
use super::invariants::{InvariantSet, LaserGameInvariants};
use super::{GameEngine, Position};
use tracing::{instrument, warn};

/// Precondition: The index names a square.
pub struct InRange;

impl InRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, IllegalMove> {
        Position::from_index(index).ok_or(IllegalMove::OutOfRange(index))
    }
}

/// Precondition: The game has not ended.
pub struct GameActive;

impl GameActive {
    /// Fails once the game is won or drawn.
    pub fn check(game: &GameEngine) -> Result<(), IllegalMove> {
        if game.status().is_terminal() {
            Err(IllegalMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: No laser is waiting to be resolved.
pub struct NoPendingLaser;

impl NoPendingLaser {
    /// Fails while a laser is in flight.
    pub fn check(game: &GameEngine) -> Result<(), IllegalMove> {
        if game.pending_laser().is_some() {
            Err(IllegalMove::LaserPending)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails on an occupied square.
    pub fn check(game: &GameEngine, pos: Position) -> Result<(), IllegalMove> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(IllegalMove::CellOccupied(pos))
        }
    }
}

/// Composite precondition for placing a mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine, index: usize) -> Result<Position, IllegalMove> {
        let pos = InRange::check(index)?;
        GameActive::check(game)?;
        NoPendingLaser::check(game)?;
        SquareIsEmpty::check(game, pos)?;
        Ok(pos)
    }
}

/// Asserts that all engine invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameEngine) {
    if let Err(violations) = LaserGameInvariants::check_all(game) {
        for violation in &violations {
            warn!(%violation, "Engine invariant violated");
        }
        debug_assert!(violations.is_empty(), "Engine invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;

    fn engine(probability: f64) -> GameEngine {
        GameEngine::new(
            EngineConfig::default()
                .with_seed(3)
                .with_laser_probability(probability),
        )
    }

    #[test]
    fn test_legal_move_on_empty_board() {
        assert_eq!(LegalMove::check(&engine(0.0), 4), Ok(Position::Center));
    }

    #[test]
    fn test_out_of_range_checked_first() {
        assert_eq!(
            LegalMove::check(&engine(0.0), 9),
            Err(IllegalMove::OutOfRange(9))
        );
    }

    #[test]
    fn test_occupied_square() {
        let mut game = engine(0.0);
        game.apply_move(4).unwrap();
        assert_eq!(
            LegalMove::check(&game, 4),
            Err(IllegalMove::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_pending_laser_blocks() {
        let mut game = engine(1.0);
        game.apply_move(4).unwrap();
        assert_eq!(LegalMove::check(&game, 0), Err(IllegalMove::LaserPending));
    }
}
