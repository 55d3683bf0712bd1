//! Headless scripted games.
//!
//! Plays a list of moves straight through the engine. Lasers resolve the
//! moment they fire, since there is nothing to animate.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use laser_tictactoe::{GameEngine, GameStatus, Position};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Plays `moves` (indices or position labels) and writes a transcript to `out`.
///
/// Unknown and illegal moves are reported and skipped. Returns the final status.
#[instrument(skip(config, out), fields(moves = moves.len()))]
pub fn run_script(config: &AppConfig, moves: &[String], out: &mut impl Write) -> Result<GameStatus> {
    let mut engine = GameEngine::new(config.engine().clone());

    for raw in moves {
        let Some(pos) = Position::from_label_or_number(raw) else {
            warn!(input = %raw, "Unrecognised move");
            writeln!(out, "? {raw}: not a square")?;
            continue;
        };

        let player = engine.current_player();
        let outcome = match engine.apply_move(pos.to_index()) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(out, "! {player} -> {pos}: {e}")?;
                continue;
            }
        };
        writeln!(out, "{}", outcome.placed())?;

        if let Some(laser) = outcome.laser() {
            let resolution = engine
                .resolve_laser(laser)
                .context("Laser fired by this move was not pending")?;
            let cleared: Vec<String> = resolution.cleared().iter().map(|p| p.to_string()).collect();
            writeln!(
                out,
                "  laser from {} cleared [{}]",
                laser.trigger(),
                cleared.join(", ")
            )?;
        }

        if engine.status().is_terminal() {
            break;
        }
    }

    let status = engine.status();
    writeln!(out, "\n{}\n\n{}", engine.board().display(), status)?;
    info!(%status, "Scripted game finished");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use laser_tictactoe::{Player, WinningLine};

    fn quiet_config() -> AppConfig {
        let toml = "[engine]\nlaser_probability = 0.0\nseed = 1\n";
        AppConfig::from_toml(toml).unwrap()
    }

    fn run(config: &AppConfig, moves: &[&str]) -> (GameStatus, String) {
        let moves: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        let mut out = Vec::new();
        let status = run_script(config, &moves, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scripted_win() {
        let (status, transcript) = run(&quiet_config(), &["0", "4", "1", "5", "2"]);
        assert_eq!(
            status,
            GameStatus::Won {
                line: WinningLine::TopRow,
                winner: Player::X,
            }
        );
        assert!(transcript.contains("X -> Top-right"));
        assert!(transcript.ends_with("Player X wins (top row)\n"));
    }

    #[test]
    fn test_labels_and_bad_input_reported() {
        let (status, transcript) = run(&quiet_config(), &["center", "center", "nowhere"]);
        assert_eq!(status, GameStatus::InProgress);
        assert!(transcript.contains("X -> Center"));
        assert!(transcript.contains("! O -> Center: Square Center is already occupied"));
        assert!(transcript.contains("? nowhere: not a square"));
    }

    #[test]
    fn test_lasers_resolve_inline() {
        let config = AppConfig::from_toml("[engine]\nlaser_probability = 1.0\nseed = 1\n").unwrap();
        let (_, transcript) = run(&config, &["0", "1"]);
        assert!(transcript.contains("laser from Top-left cleared []"));
        assert!(transcript.contains("laser from Top-center cleared [Top-left]"));
    }
}
