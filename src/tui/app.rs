//! Application state and logic.

use super::effects::LaserAnimation;
use super::input::move_cursor;
use crate::config::{AppConfig, LaserTiming};
use crossterm::event::KeyCode;
use laser_tictactoe::{GameEngine, GameStatus, Position};
use std::time::Instant;
use tracing::{debug, info, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_message: String,
    animation: Option<LaserAnimation>,
    timing: LaserTiming,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        let engine = GameEngine::new(config.engine().clone());
        Self {
            status_message: turn_message(&engine),
            engine,
            cursor: Position::Center,
            animation: None,
            timing: *config.timing(),
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the laser being animated, if any.
    pub fn animation(&self) -> Option<&LaserAnimation> {
        self.animation.as_ref()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor, now),
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.play(pos, now);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Advances the laser animation; resolves the laser once it settles.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation.take_if(|a| a.is_done(now)) else {
            return;
        };

        match self.engine.resolve_laser(animation.event()) {
            Ok(resolution) => {
                debug!(cleared = ?resolution.cleared(), "Laser settled");
                self.status_message = match resolution.final_status() {
                    GameStatus::InProgress => format!(
                        "Laser cleared {} square(s). {}",
                        resolution.cleared().len(),
                        turn_message(&self.engine)
                    ),
                    status => finished_message(*status),
                };
            }
            Err(e) => warn!(error = %e, "Dropping laser animation"),
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Illegal moves are ignored apart from a status hint.
    fn play(&mut self, pos: Position, now: Instant) {
        match self.engine.apply_move(pos.to_index()) {
            Ok(outcome) => {
                info!(placed = %outcome.placed(), "Move played");
                self.status_message = match (outcome.status(), outcome.laser()) {
                    (GameStatus::InProgress, Some(laser)) => {
                        let message = format!("Laser fired from {}!", laser.trigger());
                        self.animation =
                            Some(LaserAnimation::new(laser.clone(), self.timing, now));
                        message
                    }
                    (GameStatus::InProgress, None) => turn_message(&self.engine),
                    (status, _) => finished_message(*status),
                };
            }
            Err(e) => {
                debug!(error = %e, "Ignoring illegal move");
                if self.animation.is_none() {
                    self.status_message = format!("{}. {}", e, turn_message(&self.engine));
                }
            }
        }
    }

    /// Restarts the game, cancelling any laser in flight.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.animation = None;
        self.status_message = format!("Game restarted. {}", turn_message(&self.engine));
    }
}

fn turn_message(engine: &GameEngine) -> String {
    format!("Player {}'s turn", engine.current_player())
}

fn finished_message(status: GameStatus) -> String {
    match status {
        GameStatus::Won { winner, .. } => {
            format!("Player {} has won! Press 'r' to restart or 'q' to quit.", winner)
        }
        GameStatus::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
        GameStatus::InProgress => String::new(),
    }
}
