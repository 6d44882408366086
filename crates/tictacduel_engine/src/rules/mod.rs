//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine and the
//! computer opponent both build on these.

pub mod draw;
pub mod win;

pub use draw::{evaluate, is_full};
pub use win::{WINNING_LINES, completes_line, has_line, winner, winning_move};
