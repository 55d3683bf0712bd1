//! Laser Games - terminal front end for laser tic-tac-toe.
//!
//! The game rules live in [`laser_tictactoe`]; this crate renders them,
//! times the laser animations and feeds input back to the engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for the engine and the animation timing
//! - **TUI**: ratatui front end driving the engine's two-phase laser protocol
//! - **Play**: headless scripted games for quick checks
//!
//! # Example
//!
//! ```
//! use laser_games::{AppConfig, run_script};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::default();
//! let moves = vec!["0".to_string(), "4".to_string()];
//! let status = run_script(&config, &moves, &mut std::io::sink())?;
//! assert!(!status.is_terminal());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, LaserTiming};
pub use play::run_script;
