//! Tic-tac-toe game engine with a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Types**: board, players, game mode and derived status
//! - **Rules**: winning lines, win and draw evaluation
//! - **Computer**: win, block, center, random move selection
//! - **Engine**: the state machine that applies moves and resets games
//!
//! # Example
//!
//! ```
//! use tictacduel_engine::{GameEngine, GameMode, GameStatus, Player};
//!
//! let mut engine = GameEngine::new(GameMode::PvC);
//! let report = engine.apply_move(0);
//! assert!(*report.applied());
//! assert_eq!(engine.current_player(), Player::O);
//!
//! let report = engine.play_computer_turn().unwrap();
//! assert!(*report.applied());
//! assert_eq!(*report.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod computer;
mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use computer::{ComputerChoice, Tactic, choose_move};
pub use engine::{GameEngine, GameSnapshot, MoveReport};
pub use error::{EngineError, MoveRejection};
pub use position::Position;
pub use types::{Board, BoardParseError, CELL_COUNT, CENTER, GameMode, GameStatus, Player, Square};
