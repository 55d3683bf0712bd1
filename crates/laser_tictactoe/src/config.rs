//! Engine configuration.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Chance that a non-terminal move fires a laser.
pub const DEFAULT_LASER_PROBABILITY: f64 = 0.25;

/// Who is credited when a laser clear leaves a completed line.
///
/// The browser original announced whichever player was current when the
/// effect settled, which is the opponent of the player who fired it. That
/// behaviour is kept as the default until the rule is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinAttribution {
    /// Credit the player whose turn it is when the laser resolves.
    #[default]
    CurrentPlayer,
    /// Credit the player whose marks form the line.
    LineOwner,
}

/// Settings for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
#[serde(default)]
pub struct EngineConfig {
    /// Probability in `[0, 1]` that a qualifying move fires a laser.
    laser_probability: f64,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    seed: Option<u64>,
    /// Credit policy for laser-induced wins.
    win_attribution: WinAttribution,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            laser_probability: DEFAULT_LASER_PROBABILITY,
            seed: None,
            win_attribution: WinAttribution::default(),
        }
    }
}

impl EngineConfig {
    /// Checks that every field is usable.
    #[instrument]
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if !(0.0..=1.0).contains(&self.laser_probability) {
            return Err(InvalidConfig::LaserProbability(self.laser_probability));
        }
        Ok(())
    }
}

/// A configuration value the engine cannot use.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidConfig {
    /// Probability outside `[0, 1]` (or NaN).
    #[display("laser_probability must be within [0, 1], got {}", _0)]
    LaserProbability(#[error(not(source))] f64),
}
