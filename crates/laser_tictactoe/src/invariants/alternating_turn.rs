//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// History shows X, O, X, O, ... and the current player follows from it.
/// Lasers clear marks but never touch whose turn it is. Once the game is
/// over only the history is checked, since a win can settle after the turn
/// has already passed.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_player() == Player::X && !game.status().is_terminal();
        };

        if first.player != Player::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if game.status().is_terminal() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;

    fn quiet_engine() -> GameEngine {
        GameEngine::new(EngineConfig::default().with_laser_probability(0.0))
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&quiet_engine()));
    }

    #[test]
    fn test_sequence_holds() {
        let mut game = quiet_engine();
        for index in [0, 4, 8, 2] {
            game.apply_move(index).unwrap();
            assert!(AlternatingTurnInvariant::holds(&game));
        }
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_holds_after_winning_move() {
        let mut game = quiet_engine();
        for index in [0, 4, 1, 5, 2] {
            game.apply_move(index).unwrap();
        }
        assert!(game.status().is_terminal());
        assert_eq!(game.current_player(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&game));
    }
}
