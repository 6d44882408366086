//! Terminal UI for tictacduel.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

/// Takes over the terminal and runs `app` until the user quits.
pub fn run(mut app: App) -> Result<()> {
    info!("Starting terminal UI");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();

    if let Err(err) = &result {
        error!(error = ?err, "Terminal UI error");
    }
    info!("Terminal UI closed");
    result
}

#[instrument(skip_all)]
fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Flow::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
