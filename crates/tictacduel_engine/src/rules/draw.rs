//! Draw detection and outcome evaluation.

use super::super::types::{Board, GameStatus, Player};
use super::win::has_line;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Evaluates the board after `mover` has placed a mark.
///
/// Only the mover can have completed a line with the last placement, so
/// only the mover's lines are checked.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> GameStatus {
    if has_line(board, mover) {
        GameStatus::Won(mover)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
