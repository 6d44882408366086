//! Win detection for tic-tac-toe.

use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning triples, in the order they are scanned:
/// rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

fn is(board: &Board, index: usize, player: Player) -> bool {
    board.get(index).is_some_and(|s| s.is(player))
}

/// Checks if `player` holds all three cells of any line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| is(board, i, player)))
}

/// Returns the owner of the first completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WINNING_LINES {
        if let Some(Square::Occupied(player)) = board.get(a) {
            if is(board, b, player) && is(board, c, player) {
                return Some(player);
            }
        }
    }
    None
}

/// The empty cell that would complete `line` for `player`, if the other two
/// cells already hold `player`'s mark.
///
/// Sub-cases are checked in a fixed order: the third cell, then the middle,
/// then the first.
pub fn completes_line(board: &Board, line: [usize; 3], player: Player) -> Option<usize> {
    let [a, b, c] = line;
    if is(board, a, player) && is(board, b, player) && board.is_empty(c) {
        Some(c)
    } else if is(board, a, player) && is(board, c, player) && board.is_empty(b) {
        Some(b)
    } else if is(board, b, player) && is(board, c, player) && board.is_empty(a) {
        Some(a)
    } else {
        None
    }
}

/// First cell, in line order, where `player` would complete three in a row.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    WINNING_LINES
        .iter()
        .find_map(|&line| completes_line(board, line, player))
}
