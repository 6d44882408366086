//! Error and rejection types for the game engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was not applied.
///
/// Rejections are not errors: a stray input is absorbed as a no-op and the
/// reason is reported alongside the unchanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The index is outside 0-8.
    #[display("Cell {} is not on the board", _0)]
    InvalidIndex(usize),
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameInactive,
}

/// Failure of an engine operation.
///
/// These indicate a caller contract violation rather than user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The computer was asked to move but no empty cell remains.
    #[display("No moves available")]
    NoMovesAvailable,
    /// The computer was asked to move when it is not its turn.
    #[display("Not the computer's turn")]
    NotComputerTurn,
}
