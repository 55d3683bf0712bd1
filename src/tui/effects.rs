//! Laser animation timeline.
//!
//! The engine plans a laser the moment it fires. This module decides, from
//! elapsed time alone, what the screen shows meanwhile and when the laser is
//! handed back to the engine.

use crate::config::LaserTiming;
use laser_tictactoe::{LaserEvent, Position};
use std::time::{Duration, Instant};

/// Where an animation is along its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaserPhase {
    /// Beams sweeping the row and column.
    Beam,
    /// Marks fading; the count says how many are gone.
    Clearing(usize),
    /// All marks gone, waiting before the engine re-checks the board.
    Settling,
    /// Ready for `resolve_laser`.
    Done,
}

/// An in-flight laser animation.
#[derive(Debug, Clone)]
pub struct LaserAnimation {
    event: LaserEvent,
    timing: LaserTiming,
    started: Instant,
}

impl LaserAnimation {
    /// Starts animating `event` at `started`.
    pub fn new(event: LaserEvent, timing: LaserTiming, started: Instant) -> Self {
        Self {
            event,
            timing,
            started,
        }
    }

    /// The laser being animated.
    pub fn event(&self) -> &LaserEvent {
        &self.event
    }

    /// Phase at time `now`.
    pub fn phase(&self, now: Instant) -> LaserPhase {
        let elapsed = now.saturating_duration_since(self.started);
        let total = self.event.cells_to_clear().len();

        if elapsed >= self.timing.settle_at(total) {
            LaserPhase::Done
        } else if elapsed < self.timing.clear_at(0) {
            LaserPhase::Beam
        } else {
            let gone = self.cleared_by(elapsed);
            if gone >= total {
                LaserPhase::Settling
            } else {
                LaserPhase::Clearing(gone)
            }
        }
    }

    /// Squares already faded out at `now`; the engine still holds their marks.
    pub fn faded(&self, now: Instant) -> Vec<Position> {
        let elapsed = now.saturating_duration_since(self.started);
        self.event
            .cells_to_clear()
            .iter()
            .take(self.cleared_by(elapsed))
            .copied()
            .collect()
    }

    /// True while the beams should be drawn across `pos`.
    pub fn lights(&self, pos: Position, now: Instant) -> bool {
        !matches!(self.phase(now), LaserPhase::Done) && self.event.sweeps(pos)
    }

    /// True once the engine should be told.
    pub fn is_done(&self, now: Instant) -> bool {
        self.phase(now) == LaserPhase::Done
    }

    /// Time left until the laser settles.
    pub fn remaining(&self, now: Instant) -> Duration {
        let total = self.timing.settle_at(self.event.cells_to_clear().len());
        total.saturating_sub(now.saturating_duration_since(self.started))
    }

    fn cleared_by(&self, elapsed: Duration) -> usize {
        let total = self.event.cells_to_clear().len();
        (0..total)
            .take_while(|n| elapsed >= self.timing.clear_at(n + 1))
            .count()
    }
}
