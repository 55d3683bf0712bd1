//! Board-backed invariant: every mark on the board was placed by a move.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: the board is explained by the move history.
///
/// Each occupied square holds the mark of the latest move played there.
/// Lasers may empty squares, so an empty square says nothing.
pub struct BoardBackedByHistoryInvariant;

impl Invariant<GameEngine> for BoardBackedByHistoryInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.board()
            .squares()
            .iter()
            .enumerate()
            .all(|(index, square)| match square {
                Square::Empty => true,
                Square::Occupied(player) => game
                    .history()
                    .iter()
                    .rev()
                    .find(|m| m.position.to_index() == index)
                    .is_some_and(|m| m.player == *player),
            })
    }

    fn description() -> &'static str {
        "Every mark on the board matches the latest move at that square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;

    #[test]
    fn test_holds_after_moves_and_clears() {
        let mut game = GameEngine::new(
            EngineConfig::default()
                .with_seed(11)
                .with_laser_probability(1.0),
        );
        for index in [0, 1, 2, 4] {
            if game.status().is_terminal() {
                break;
            }
            if game.board().is_empty(crate::Position::from_index(index).unwrap()) {
                let outcome = game.apply_move(index).unwrap();
                if let Some(laser) = outcome.laser() {
                    game.resolve_laser(laser).unwrap();
                }
            }
            assert!(BoardBackedByHistoryInvariant::holds(&game));
        }
    }
}
