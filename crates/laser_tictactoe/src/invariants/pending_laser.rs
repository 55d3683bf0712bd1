//! Pending laser invariant: an unresolved laser belongs to a live game.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: a pending laser implies the game is in progress and the
/// square it fired from still holds a mark.
pub struct PendingLaserInvariant;

impl Invariant<GameEngine> for PendingLaserInvariant {
    fn holds(game: &GameEngine) -> bool {
        match game.pending_laser() {
            None => true,
            Some(laser) => {
                !game.status().is_terminal() && !game.board().is_empty(*laser.trigger())
            }
        }
    }

    fn description() -> &'static str {
        "A pending laser only exists while the game is in progress"
    }
}
