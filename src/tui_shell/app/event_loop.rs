use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::registry::CapabilityRegistry;

use super::super::modal::TerminalPrompter;
use super::App;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_>,
    registry: &dyn CapabilityRegistry,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, &*app))
            .context("draw")?;
        if app.close.is_some() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    let mut prompter = TerminalPrompter {
                        terminal: &mut *terminal,
                        registry,
                    };
                    app.handle_key(k, &mut prompter);
                }
                _ => {}
            }
        }
    }
}
