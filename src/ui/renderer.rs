//! Terminal setup and the main event loop

use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Write};

/// Puts the terminal back to normal when dropped, including on early error returns
pub struct TerminalRestore<W: Write> {
    writer: W,
}

impl<W: Write> TerminalRestore<W> {
    /// Arm the guard; raw mode is expected to be enabled already
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W: Write> Drop for TerminalRestore<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(self.writer, LeaveAlternateScreen, DisableBracketedPaste, Show) {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Run the todo screen until the user quits
pub async fn run_app(mut app: AppComponent) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut restore = TerminalRestore::new(io::stdout());
    execute!(restore.writer_mut(), EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    run_app_loop(&mut terminal, &mut app, &mut event_handler).await
}

/// Apply one loop event and any notification outcomes that have arrived.
///
/// Returns whether the screen needs redrawing.
pub fn handle_loop_event(app: &mut AppComponent, event: EventType) -> anyhow::Result<bool> {
    let mut needs_render = match event {
        EventType::Tick | EventType::Other => false,
        event => {
            app.handle_event(event)?;
            true
        }
    };

    // Outcomes are drained every iteration so a steady stream of keys can't hold them back
    if app.apply_background_actions() {
        needs_render = true;
    }

    Ok(needs_render)
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        if handle_loop_event(app, event)? {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
