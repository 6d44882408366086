//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, computer-controlled in single player).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Square {
    /// Returns true if this cell holds `player`'s mark.
    pub fn is(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

/// Who plays against whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    PvP,
    /// A human plays X against the computer as O.
    PvC,
}

impl GameMode {
    /// The player driven by the computer in this mode, if any.
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::PvP => None,
            GameMode::PvC => Some(Player::O),
        }
    }

    /// Menu label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PvP => "Multiplayer",
            GameMode::PvC => "Single player",
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from an arbitrary arrangement of cells.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the cell at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Marks an empty cell. Returns false and leaves the board untouched if
    /// the index is out of range or the cell is taken.
    pub(crate) fn place(&mut self, index: usize, player: Player) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        self.squares[index] = Square::Occupied(player);
        true
    }

    /// Returns all cells.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a text grid, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, square) in self.squares.iter().enumerate() {
            match square {
                Square::Empty => result.push_str(&(i + 1).to_string()),
                Square::Occupied(player) => result.push_str(&player.to_string()),
            }
            match i % 3 {
                2 if i < CELL_COUNT - 1 => result.push_str("\n-+-+-\n"),
                2 => {}
                _ => result.push('|'),
            }
        }
        result
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// A character was not a mark or an empty-cell marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells, ignoring whitespace. `X`/`O` are marks and
    /// `.`, `_` or `-` are empty.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; CELL_COUNT] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Game in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Player {} has won!", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Game ended in a draw!")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::O)));
        assert_eq!(board.empty_cells(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XX?......".parse::<Board>(),
            Err(BoardParseError::InvalidCell('?'))
        );
    }

    #[test]
    fn test_place_only_fills_empty_cells() {
        let mut board = Board::new();
        assert!(board.place(4, Player::X));
        assert!(!board.place(4, Player::O));
        assert!(!board.place(9, Player::O));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|X");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("pvc".parse::<GameMode>().unwrap(), GameMode::PvC);
        assert_eq!("PvP".parse::<GameMode>().unwrap(), GameMode::PvP);
        assert_eq!(GameMode::PvC.to_string(), "pvc");
        assert_eq!(GameMode::PvC.computer(), Some(Player::O));
        assert_eq!(GameMode::PvP.computer(), None);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Player O has won!");
        assert_eq!(GameStatus::Draw.to_string(), "Game ended in a draw!");
    }
}
