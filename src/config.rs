//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use laser_tictactoe::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// File looked up when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "laser_games.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Engine settings (laser chance, seed, win attribution).
    engine: EngineConfig,

    /// Laser animation timing.
    timing: LaserTiming,

    /// Where the TUI writes its logs.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            timing: LaserTiming::default(),
            log_file: PathBuf::from("laser_games.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config
            .engine
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid engine config: {}", e)))?;
        info!(
            laser_probability = *config.engine.laser_probability(),
            seed = ?config.engine.seed(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read when present and defaults are used otherwise. A `seed` overrides
    /// whatever the file says.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>, seed: Option<u64>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        if let Some(seed) = seed {
            config.engine = config.engine.with_seed(seed);
        }
        Ok(config)
    }
}

/// Laser animation timing, in milliseconds.
///
/// The beams show for `beam_delay_ms`, then one marked square fades every
/// `clear_stagger_ms`, then the board rests for `settle_ms` before the
/// engine is told the laser is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserTiming {
    /// Beam sweep before the first square clears.
    beam_delay_ms: u64,
    /// Gap between successive clears.
    clear_stagger_ms: u64,
    /// Pause after the last clear.
    settle_ms: u64,
}

impl Default for LaserTiming {
    fn default() -> Self {
        Self {
            beam_delay_ms: 400,
            clear_stagger_ms: 100,
            settle_ms: 300,
        }
    }
}

impl LaserTiming {
    /// Builds a timing profile.
    pub fn new(beam_delay_ms: u64, clear_stagger_ms: u64, settle_ms: u64) -> Self {
        Self {
            beam_delay_ms,
            clear_stagger_ms,
            settle_ms,
        }
    }

    /// When the `n`th square (0-based) disappears.
    pub fn clear_at(&self, n: usize) -> Duration {
        Duration::from_millis(self.beam_delay_ms + self.clear_stagger_ms * n as u64)
    }

    /// When a laser clearing `count` squares is handed back to the engine.
    pub fn settle_at(&self, count: usize) -> Duration {
        self.clear_at(count) + Duration::from_millis(self.settle_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laser_tictactoe::WinAttribution;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            log_file = "/tmp/lasers.log"

            [engine]
            laser_probability = 0.5
            win_attribution = "line_owner"

            [timing]
            settle_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(*config.engine().laser_probability(), 0.5);
        assert_eq!(
            *config.engine().win_attribution(),
            WinAttribution::LineOwner
        );
        assert_eq!(*config.timing().settle_ms(), 50);
        assert_eq!(*config.timing().beam_delay_ms(), 400);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/lasers.log"));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = AppConfig::from_toml("[engine]\nlaser_probability = 2.0\n").unwrap_err();
        assert!(err.message.contains("laser_probability"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = AppConfig::from_toml("engine = 3").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_timing_schedule() {
        let timing = LaserTiming::default();
        assert_eq!(timing.clear_at(0), Duration::from_millis(400));
        assert_eq!(timing.clear_at(2), Duration::from_millis(600));
        assert_eq!(timing.settle_at(2), Duration::from_millis(900));
        assert_eq!(timing.settle_at(0), Duration::from_millis(700));
    }
}
