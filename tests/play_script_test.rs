//! End-to-end scripted games through the public front-end API.

use laser_games::{AppConfig, run_script};
use laser_tictactoe::{GameStatus, Player, WinningLine};

fn play(toml: &str, moves: &[&str]) -> (GameStatus, String) {
    let config = AppConfig::from_toml(toml).unwrap();
    let moves: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    let mut out = Vec::new();
    let status = run_script(&config, &moves, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn test_draw_transcript() {
    let (status, transcript) = play(
        "[engine]\nlaser_probability = 0.0",
        &["0", "1", "2", "4", "3", "5", "7", "6", "8"],
    );
    assert_eq!(status, GameStatus::Draw);
    assert!(transcript.ends_with("Draw\n"));
    assert!(transcript.contains("X|O|X"));
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let (status, transcript) = play(
        "[engine]\nlaser_probability = 0.0",
        &[
            "top-left",
            "center",
            "top-center",
            "4",
            "bottom-left",
            "top-right",
            "bottom-right",
        ],
    );
    assert_eq!(
        status,
        GameStatus::Won {
            line: WinningLine::TopRow,
            winner: Player::X,
        }
    );
    assert!(transcript.contains("! O -> Center: Square Center is already occupied"));
    assert!(transcript.contains("O -> Bottom-left"));
    assert!(!transcript.contains("Bottom-right"));
}

#[test]
fn test_seeded_scripts_repeat() {
    let toml = "[engine]\nlaser_probability = 0.5\nseed = 2024";
    let moves = ["0", "4", "8", "2", "6", "3", "5", "1", "7"];
    let (first_status, first) = play(toml, &moves);
    let (second_status, second) = play(toml, &moves);
    assert_eq!(first_status, second_status);
    assert_eq!(first, second);
}
