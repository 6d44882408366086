//! Application state and key handling, independent of the terminal.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use tictacduel_engine::{GameEngine, GameMode, MoveRejection, MoveReport, Position};
use tracing::{debug, info, instrument, warn};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing single player or multiplayer.
    ModeSelect,
    /// Playing on the board.
    Board,
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    screen: Screen,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates the application, starting on the board if `mode` is given.
    pub fn new(engine: GameEngine, mode: Option<GameMode>) -> Self {
        let mut app = Self {
            engine,
            screen: Screen::ModeSelect,
            cursor: Position::Center,
            status_message: "Choose a mode".to_string(),
        };
        if let Some(mode) = mode {
            app.start(mode);
        }
        app
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The status line text.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match (self.screen, key) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => return Flow::Quit,
            (Screen::ModeSelect, KeyCode::Char('1')) => self.start(GameMode::PvC),
            (Screen::ModeSelect, KeyCode::Char('2')) => self.start(GameMode::PvP),
            (Screen::ModeSelect, _) => {}
            (Screen::Board, KeyCode::Char('r')) => self.restart(),
            (Screen::Board, KeyCode::Char('m')) => self.back_to_menu(),
            (Screen::Board, KeyCode::Enter | KeyCode::Char(' ')) => self.place(self.cursor.index()),
            (Screen::Board, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            (Screen::Board, other) => {
                if let Some(index) = digit_cell(other) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.place(index);
                }
            }
        }
        Flow::Continue
    }

    /// Resets the engine in `mode` and shows the board.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) {
        info!(%mode, "Starting game");
        self.engine.reset(Some(mode));
        self.screen = Screen::Board;
        self.cursor = Position::Center;
        self.status_message = self.turn_message();
    }

    fn restart(&mut self) {
        self.engine.reset(None);
        self.cursor = Position::Center;
        self.status_message = format!("Game restarted. {}", self.turn_message());
    }

    fn back_to_menu(&mut self) {
        self.screen = Screen::ModeSelect;
        self.status_message = "Choose a mode".to_string();
    }

    /// Places the current player's mark, then lets the computer answer in
    /// single player.
    #[instrument(skip(self))]
    fn place(&mut self, index: usize) {
        let report = self.engine.apply_move(index);
        if let Some(rejection) = report.rejection() {
            debug!(%rejection, "Ignoring move");
            if self.engine.is_active() {
                self.status_message =
                    format!("{}. {}", rejection_message(*rejection), self.turn_message());
            }
            return;
        }

        if self.engine.is_computer_turn() {
            match self.engine.play_computer_turn() {
                Ok(report) => self.after_move(&report, true),
                Err(e) => {
                    warn!(error = %e, "Computer could not move");
                    self.status_message = e.to_string();
                }
            }
        } else {
            self.after_move(&report, false);
        }
    }

    fn after_move(&mut self, report: &MoveReport, by_computer: bool) {
        let prefix = match (by_computer, self.engine.history().last()) {
            (true, Some(&index)) => Position::from_index(index)
                .map(|pos| format!("Computer played {}. ", pos))
                .unwrap_or_default(),
            _ => String::new(),
        };

        if report.status().is_over() {
            self.status_message = format!("{}{} Press 'r' to restart.", prefix, report.status());
            match serde_json::to_string(&self.engine.state()) {
                Ok(json) => info!(state = %json, "Final position"),
                Err(e) => warn!(error = %e, "Could not serialize final position"),
            }
        } else {
            self.status_message = format!("{}{}", prefix, self.turn_message());
        }
    }

    fn turn_message(&self) -> String {
        format!("Player {}'s turn", self.engine.current_player())
    }
}

/// Describes a rejected move using the 1-9 numbering shown on the board.
fn rejection_message(rejection: MoveRejection) -> String {
    match rejection {
        MoveRejection::CellOccupied(index) => match Position::from_index(index) {
            Some(pos) => format!("Cell {} ({}) is already occupied", index + 1, pos),
            None => format!("Cell {} is already occupied", index + 1),
        },
        MoveRejection::InvalidIndex(index) => format!("Cell {} is not on the board", index + 1),
        MoveRejection::GameInactive => rejection.to_string(),
    }
}
