//! The game engine: turn order, win/draw evaluation and the laser lifecycle.
//!
//! Moves and lasers follow a two-phase protocol. [`GameEngine::apply_move`]
//! places the mark, evaluates the board and may fire a laser; the laser is
//! planned right away but the board is only cleared when the front end calls
//! [`GameEngine::resolve_laser`]. Until then the engine refuses moves.
//! [`GameEngine::reset`] cancels a pending laser outright.

use super::action::{IllegalMove, LaserError, Move};
use super::contracts::{LegalMove, assert_invariants};
use super::laser::{LaserEvent, LaserResolution};
use super::rng::GameRng;
use super::rules::{check_draw, check_win};
use super::{Board, EngineConfig, GameStatus, Player, Position, Square, WinAttribution};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The mark that was placed.
    placed: Move,
    /// Status after the move.
    status: GameStatus,
    /// The player now to move, if the turn passed.
    switched_to: Option<Player>,
    /// The laser fired by this move, to be handed back to `resolve_laser`.
    laser: Option<LaserEvent>,
}

impl MoveOutcome {
    /// True if this move won the game.
    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    /// True if this move drew the game.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }
}

/// Laser tic-tac-toe engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
    pending: Option<LaserEvent>,
    last_resolved: Option<u64>,
    next_laser_id: u64,
    rng: GameRng,
    config: EngineConfig,
}

impl GameEngine {
    /// Creates a new game.
    ///
    /// A seeded config gives a reproducible laser sequence.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            pending: None,
            last_resolved: None,
            next_laser_id: 1,
            rng,
            config,
        }
    }

    /// Creates a new game with default settings and a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the laser awaiting resolution, if any.
    pub fn pending_laser(&self) -> Option<&LaserEvent> {
        self.pending.as_ref()
    }

    /// Returns the engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True when the engine will accept a move.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal() && self.pending.is_none()
    }

    /// Positions a move may target right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_active() {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Rejected moves leave the engine untouched. A move that neither wins
    /// nor draws passes the turn and may fire a laser, returned in the
    /// outcome.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, IllegalMove> {
        let position = LegalMove::check(self, index).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let placed = Move::new(self.current_player, position);
        self.board.set(position, Square::Occupied(placed.player));
        self.history.push(placed);
        info!(%placed, "Move accepted");

        if let Some(line) = check_win(&self.board) {
            self.status = GameStatus::Won {
                line,
                winner: placed.player,
            };
            info!(%line, winner = %placed.player, "Game won");
            return Ok(self.finish_move(placed, None, None));
        }

        if check_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
            return Ok(self.finish_move(placed, None, None));
        }

        self.current_player = self.current_player.opponent();

        let laser = if self.rng.chance(self.laser_probability()) {
            let event = LaserEvent::plan(self.next_laser_id, &self.board, position);
            self.next_laser_id += 1;
            info!(
                laser_id = *event.id(),
                trigger = %position,
                to_clear = ?event.indices_to_clear(),
                "Laser fired"
            );
            self.pending = Some(event.clone());
            Some(event)
        } else {
            None
        };

        Ok(self.finish_move(placed, Some(self.current_player), laser))
    }

    /// Applies a fired laser: clears its squares, then re-checks win and draw
    /// on the cleared board.
    ///
    /// Resolving the same event again is a no-op that reports nothing
    /// cleared. Events cancelled by [`reset`](Self::reset) are refused.
    #[instrument(skip(self, event), fields(laser_id = *event.id()))]
    pub fn resolve_laser(&mut self, event: &LaserEvent) -> Result<LaserResolution, LaserError> {
        let id = *event.id();
        let laser = match self.pending.take() {
            Some(pending) if *pending.id() == id => pending,
            other => {
                self.pending = other;
                if self.last_resolved == Some(id) {
                    debug!("Laser already resolved");
                    return Ok(LaserResolution::new(Vec::new(), self.status));
                }
                warn!("Stale laser event refused");
                return Err(LaserError::Stale(id));
            }
        };

        let mut cleared = Vec::with_capacity(laser.cells_to_clear().len());
        for pos in laser.cells_to_clear() {
            if !self.board.is_empty(*pos) {
                self.board.set(*pos, Square::Empty);
                cleared.push(*pos);
            }
        }
        self.last_resolved = Some(id);
        debug!(?cleared, "Laser cleared squares");

        if !self.status.is_terminal() {
            if let Some(line) = check_win(&self.board) {
                let winner = match self.config.win_attribution() {
                    WinAttribution::CurrentPlayer => self.current_player,
                    WinAttribution::LineOwner => {
                        line.owner(&self.board).unwrap_or(self.current_player)
                    }
                };
                self.status = GameStatus::Won { line, winner };
                info!(%line, %winner, "Game won after laser");
            } else if check_draw(&self.board) {
                self.status = GameStatus::Draw;
                info!("Game drawn after laser");
            }
        }

        #[cfg(debug_assertions)]
        assert_invariants(self);

        Ok(LaserResolution::new(cleared, self.status))
    }

    /// Starts a fresh game: empty board, X to move, pending laser cancelled.
    ///
    /// The RNG keeps its stream, so a seeded engine stays reproducible
    /// across resets.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(laser) = self.pending.take() {
            info!(laser_id = *laser.id(), "Pending laser cancelled by reset");
        }
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.last_resolved = None;
        info!("Game reset");
    }

    fn finish_move(
        &self,
        placed: Move,
        switched_to: Option<Player>,
        laser: Option<LaserEvent>,
    ) -> MoveOutcome {
        #[cfg(debug_assertions)]
        assert_invariants(self);

        MoveOutcome {
            placed,
            status: self.status,
            switched_to,
            laser,
        }
    }

    fn laser_probability(&self) -> f64 {
        let p = *self.config.laser_probability();
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
