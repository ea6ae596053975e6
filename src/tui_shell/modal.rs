use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::model::Preset;
use crate::registry::{CapabilityRegistry, resolve_effect};
use crate::selector::{HELP_PAGE, HelpViewer, ParamPrompter};

use super::input::Input;

/// Free-text parameter editor. Esc hands back the original string.
pub(super) struct TextPrompt {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) input: Input,
    original: String,
}

impl TextPrompt {
    pub(super) fn new(identifier: &str, current: &str, defaults: Option<String>) -> Self {
        let mut lines = vec![format!("Parameters for {identifier}")];
        if let Some(d) = defaults.filter(|d| !d.is_empty()) {
            lines.push(format!("defaults: {d}"));
        }
        Self {
            title: "Edit Parameters".to_string(),
            lines,
            input: Input::with_text(current),
            original: current.to_string(),
        }
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Esc => return Some(self.original.clone()),
            KeyCode::Enter => return Some(self.input.buf.clone()),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    self.input.insert_char(c);
                }
            }
            _ => {}
        }
        None
    }
}

/// Pick one stored preset. Esc (or an empty list) hands back the original.
pub(super) struct PresetPrompt {
    pub(super) title: String,
    pub(super) presets: Vec<Preset>,
    pub(super) selected: usize,
    original: String,
}

impl PresetPrompt {
    pub(super) fn new(identifier: &str, current: &str, presets: Vec<Preset>) -> Self {
        Self {
            title: format!("Use Preset: {identifier}"),
            presets,
            selected: 0,
            original: current.to_string(),
        }
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Esc => return Some(self.original.clone()),
            KeyCode::Enter => {
                return Some(
                    self.presets
                        .get(self.selected)
                        .map(|p| p.params.clone())
                        .unwrap_or_else(|| self.original.clone()),
                );
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.presets.len().saturating_sub(1));
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.presets.len().saturating_sub(1),
            _ => {}
        }
        None
    }
}

#[derive(Debug)]
pub(super) struct HelpModal {
    pub(super) page: String,
    pub(super) lines: Vec<String>,
    pub(super) scroll: usize,
}

impl HelpModal {
    pub(super) fn new(page: &str) -> Self {
        Self {
            page: page.to_string(),
            lines: help_lines(page),
            scroll: 0,
        }
    }

    /// Returns true once the modal should close.
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) => return true,
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => {
                if self.scroll < self.lines.len().saturating_sub(1) {
                    self.scroll += 1;
                }
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => {
                self.scroll = (self.scroll + 10).min(self.lines.len().saturating_sub(1));
            }
            _ => {}
        }
        false
    }
}

/// Holds the help modal the dialog is currently showing, if any.
#[derive(Debug, Default)]
pub(super) struct HelpSlot(pub(super) Option<HelpModal>);

impl HelpViewer for HelpSlot {
    fn show_help(&mut self, page: &str) {
        tracing::debug!(page, "show help");
        self.0 = Some(HelpModal::new(page));
    }
}

fn help_lines(page: &str) -> Vec<String> {
    if page != HELP_PAGE {
        return vec![format!("No help available for \"{page}\".")];
    }
    [
        "Choose one command for this step of the chain.",
        "",
        "Up/Down, PgUp/PgDn, Home/End   move through the command list",
        "Tab                            switch between list and parameters",
        "Ctrl-E                         edit parameters (effects only)",
        "Ctrl-P                         apply a stored preset",
        "Enter                          use the selected command",
        "Esc                            close without changes",
        "",
        "Special commands have no parameters; both actions stay disabled.",
        "Parameters typed by hand are kept as written; trailing spaces are dropped.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub(super) fn modal_area(area: Rect) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 22);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w.min(area.width),
        height: h.min(area.height),
    }
}

fn modal_block(frame: &mut ratatui::Frame, title: &str, with_enter: bool) -> Rect {
    let box_area = modal_area(frame.area());
    frame.render_widget(ratatui::widgets::Clear, box_area);

    let mut spans = vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
    ];
    if with_enter {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Enter", Style::default().fg(Color::Gray)));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    inner
}

pub(super) fn draw_help(frame: &mut ratatui::Frame, help: &HelpModal) {
    let inner = modal_block(frame, &format!("Help: {}", help.page), false);
    let lines: Vec<Line> = help.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = help.scroll.min(help.lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

pub(super) fn draw_text_prompt(frame: &mut ratatui::Frame, prompt: &TextPrompt) {
    let inner = modal_block(frame, &prompt.title, true);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let lines: Vec<Line> = prompt.lines.iter().map(|s| Line::from(s.as_str())).collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

    frame.render_widget(
        Paragraph::new(prompt.input.buf.as_str())
            .block(Block::default().borders(Borders::ALL).title("Parameters")),
        parts[1],
    );
    let x = prompt.input.cursor_col() as u16;
    frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
}

pub(super) fn draw_preset_prompt(frame: &mut ratatui::Frame, prompt: &PresetPrompt) {
    let inner = modal_block(frame, &prompt.title, true);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let rows: Vec<ListItem> = if prompt.presets.is_empty() {
        vec![ListItem::new("(no presets)")]
    } else {
        prompt
            .presets
            .iter()
            .map(|p| ListItem::new(p.name.as_str()))
            .collect()
    };
    let mut state = ListState::default();
    if !prompt.presets.is_empty() {
        state.select(Some(prompt.selected));
    }
    let list = List::new(rows)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, parts[0], &mut state);

    let preview = prompt
        .presets
        .get(prompt.selected)
        .map(|p| p.params.as_str())
        .unwrap_or("");
    frame.render_widget(
        Paragraph::new(preview)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("Parameters")),
        parts[1],
    );
}

/// Runs the editors as nested modal loops on the dialog's terminal.
pub(super) struct TerminalPrompter<'t, 'r> {
    pub(super) terminal: &'t mut Terminal<CrosstermBackend<io::Stdout>>,
    pub(super) registry: &'r dyn CapabilityRegistry,
}

impl TerminalPrompter<'_, '_> {
    fn run<P>(
        &mut self,
        prompt: &mut P,
        draw: fn(&mut ratatui::Frame, &P),
        on_key: fn(&mut P, KeyEvent) -> Option<String>,
    ) -> Result<String> {
        loop {
            self.terminal
                .draw(|f| draw(f, &*prompt))
                .context("draw prompt")?;
            if event::poll(std::time::Duration::from_millis(50)).context("poll")?
                && let Event::Key(k) = event::read().context("read event")?
                && k.kind == KeyEventKind::Press
                && let Some(out) = on_key(prompt, k)
            {
                return Ok(out);
            }
        }
    }
}

impl ParamPrompter for TerminalPrompter<'_, '_> {
    fn prompt_for_params(&mut self, identifier: &str, current: &str) -> String {
        let defaults = resolve_effect(self.registry, identifier)
            .map(|id| self.registry.default_preset(&id));
        let mut prompt = TextPrompt::new(identifier, current, defaults);
        self.run(&mut prompt, draw_text_prompt, TextPrompt::handle_key)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %format!("{err:#}"), "parameter editor failed");
                current.to_string()
            })
    }

    fn prompt_for_preset(&mut self, identifier: &str, current: &str) -> String {
        let presets = resolve_effect(self.registry, identifier)
            .map(|id| self.registry.presets(&id))
            .unwrap_or_default();
        let mut prompt = PresetPrompt::new(identifier, current, presets);
        self.run(&mut prompt, draw_preset_prompt, PresetPrompt::handle_key)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %format!("{err:#}"), "preset picker failed");
                current.to_string()
            })
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/modal_tests.rs"]
mod tests;
