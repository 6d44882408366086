//! The tic-tac-toe state machine.
//!
//! [`GameEngine`] owns the board, the player to move, the game mode and the
//! active flag. All mutation goes through [`GameEngine::apply_move`] and
//! [`GameEngine::reset`]; invalid input is absorbed as a reported no-op.

use super::computer::{ComputerChoice, choose_move};
use super::error::{EngineError, MoveRejection};
use super::rules;
use super::types::{Board, CELL_COUNT, GameMode, GameStatus, Player};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a move attempt, with the state after it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// Whether the board changed.
    applied: bool,
    /// Reason the move was ignored, if it was.
    rejection: Option<MoveRejection>,
    /// Board after the attempt.
    board: Board,
    /// Status after the attempt.
    status: GameStatus,
    /// Player to move next (the mover, if the game just ended).
    current_player: Player,
}

/// Read-only view of an engine's state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Derived game status.
    status: GameStatus,
    /// Player to move (the last mover once the game is over).
    current_player: Player,
    /// Game mode.
    mode: GameMode,
    /// True while moves are accepted.
    active: bool,
    /// Cell indices in the order they were played.
    history: Vec<usize>,
}

/// Tic-tac-toe game engine.
///
/// Generic over the random source used by the computer's fallback move so
/// tests can seed it.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    board: Board,
    current_player: Player,
    mode: GameMode,
    active: bool,
    history: Vec<usize>,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates a new game in `mode` with an entropy-seeded random source.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates a new game in `mode` using `rng` for random computer moves.
    #[instrument(skip(rng))]
    pub fn with_rng(mode: GameMode, rng: R) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            active: true,
            history: Vec::new(),
            rng,
        }
    }

    /// Resumes play from an arbitrary position with `to_move` next.
    ///
    /// If the board already holds a completed line or is full, the game
    /// starts inactive and the player to move is left as given.
    #[instrument(skip(board, rng))]
    pub fn from_board(mode: GameMode, board: Board, to_move: Player, rng: R) -> Self {
        let active = rules::winner(&board).is_none() && !rules::is_full(&board);
        Self {
            board,
            current_player: to_move,
            mode,
            active,
            history: Vec::new(),
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the indices played since the last reset.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns true if the computer should move now.
    pub fn is_computer_turn(&self) -> bool {
        self.active && self.mode.computer() == Some(self.current_player)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Out-of-range indices, occupied cells and finished games leave the
    /// state untouched; the report carries the reason. After an applied
    /// move the outcome is evaluated: a win or draw ends the game with the
    /// mover still current, otherwise the turn passes.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveReport {
        if let Some(rejection) = self.check_move(index) {
            debug!(%rejection, "Move ignored");
            return self.report(Some(rejection));
        }

        let mover = self.current_player;
        self.board.place(index, mover);
        self.history.push(index);

        let status = self.evaluate_outcome();
        if status.is_over() {
            self.active = false;
            info!(%status, moves = self.history.len(), "Game over");
        } else {
            self.current_player = mover.opponent();
        }

        self.report(None)
    }

    fn check_move(&self, index: usize) -> Option<MoveRejection> {
        if !self.active {
            Some(MoveRejection::GameInactive)
        } else if index >= CELL_COUNT {
            Some(MoveRejection::InvalidIndex(index))
        } else if !self.board.is_empty(index) {
            Some(MoveRejection::CellOccupied(index))
        } else {
            None
        }
    }

    fn report(&self, rejection: Option<MoveRejection>) -> MoveReport {
        MoveReport {
            applied: rejection.is_none(),
            rejection,
            board: self.board.clone(),
            status: self.status(),
            current_player: self.current_player,
        }
    }

    /// Evaluates the board for the current player, who is the last mover
    /// whenever this is called between placement and turn switch.
    pub fn evaluate_outcome(&self) -> GameStatus {
        rules::evaluate(&self.board, self.current_player)
    }

    /// Derived status of the game.
    ///
    /// Equal to [`evaluate_outcome`](Self::evaluate_outcome) during normal
    /// play; for a resumed position it reports any completed line.
    pub fn status(&self) -> GameStatus {
        match rules::winner(&self.board) {
            Some(player) => GameStatus::Won(player),
            None if rules::is_full(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Selects a cell for the current player with the computer heuristic.
    ///
    /// Does not change the board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoMovesAvailable`] if the board is full.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn compute_computer_move(&mut self) -> Result<usize, EngineError> {
        self.computer_choice().map(|choice| *choice.index())
    }

    /// Like [`compute_computer_move`](Self::compute_computer_move), also
    /// reporting which rule made the choice.
    pub fn computer_choice(&mut self) -> Result<ComputerChoice, EngineError> {
        choose_move(&self.board, self.current_player, &mut self.rng)
    }

    /// Selects and applies the computer's move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotComputerTurn`] unless the game is active in
    /// single-player mode with the computer to move, and
    /// [`EngineError::NoMovesAvailable`] if the board is full.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Result<MoveReport, EngineError> {
        if !self.is_computer_turn() {
            return Err(EngineError::NotComputerTurn);
        }
        let choice = self.computer_choice()?;
        debug!(index = choice.index(), tactic = %choice.tactic(), "Applying computer move");
        Ok(self.apply_move(*choice.index()))
    }

    /// Starts a fresh game, optionally switching mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Option<GameMode>) {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self.board = Board::new();
        self.current_player = Player::X;
        self.active = true;
        self.history.clear();
        info!(mode = %self.mode, "Game reset");
    }

    /// Snapshot of the full state.
    pub fn state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            status: self.status(),
            current_player: self.current_player,
            mode: self.mode,
            active: self.active,
            history: self.history.clone(),
        }
    }
}
