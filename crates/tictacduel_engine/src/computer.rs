//! Move selection for the computer opponent.
//!
//! A fixed priority heuristic: take a winning cell, otherwise block the
//! opponent's winning cell, otherwise take the center, otherwise pick any
//! empty cell uniformly at random. Selection never mutates the board.

use super::error::EngineError;
use super::position::Position;
use super::rules::winning_move;
use super::types::{Board, CENTER, Player};
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tactic {
    /// Completes a line for the computer.
    Win,
    /// Denies the opponent a completed line.
    Block,
    /// Takes the center cell.
    Center,
    /// Uniform pick among empty cells.
    Random,
}

/// A selected cell together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct ComputerChoice {
    /// Board index (0-8).
    index: usize,
    /// Rule that selected the index.
    tactic: Tactic,
}

/// Chooses a cell for `player` on `board`.
///
/// # Errors
///
/// Returns [`EngineError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<ComputerChoice, EngineError> {
    let choice = if let Some(index) = winning_move(board, player) {
        ComputerChoice::new(index, Tactic::Win)
    } else if let Some(index) = winning_move(board, player.opponent()) {
        ComputerChoice::new(index, Tactic::Block)
    } else if board.is_empty(CENTER) {
        ComputerChoice::new(CENTER, Tactic::Center)
    } else {
        let open = board.empty_cells();
        let index = open
            .choose(rng)
            .copied()
            .ok_or(EngineError::NoMovesAvailable)?;
        ComputerChoice::new(index, Tactic::Random)
    };

    debug!(
        index = choice.index,
        tactic = %choice.tactic,
        cell = ?Position::from_index(choice.index).map(|pos| pos.to_string()),
        "Computer chose cell"
    );
    Ok(choice)
}
