use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::catalog::CommandCatalog;
use crate::model::CommandStep;
use crate::registry::CapabilityRegistry;
use crate::selector::{CommandSelector, DialogOutcome, ParamMemory, ParamPrompter};

use super::input::Input;
use super::modal::HelpSlot;

mod event_loop;
mod render;

const PAGE_ROWS: usize = 10;

pub(super) fn run(
    catalog: &dyn CommandCatalog,
    registry: &dyn CapabilityRegistry,
    memory: &dyn ParamMemory,
    seed: Option<&CommandStep>,
) -> Result<DialogOutcome> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the command dialog requires an interactive terminal (TTY)");
    }

    let mut app = App::new(CommandSelector::new(catalog, registry, memory), seed);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app, registry);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res?;
    Ok(app.into_outcome())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    List,
    Params,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CloseRequest {
    Commit,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StatusKind {
    Output,
    Error,
}

pub(super) struct App<'a> {
    pub(super) selector: CommandSelector<'a>,
    pub(super) params: Input,
    pub(super) focus: Focus,
    pub(super) help: HelpSlot,
    pub(super) status: Option<(StatusKind, String)>,
    pub(super) close: Option<CloseRequest>,
}

impl<'a> App<'a> {
    pub(super) fn new(mut selector: CommandSelector<'a>, seed: Option<&CommandStep>) -> Self {
        selector.load_catalog();
        if let Some(step) = seed {
            selector.set_command_and_params(&step.identifier, &step.params);
        }
        let params = Input::with_text(&selector.state().parameter_text);
        Self {
            selector,
            params,
            focus: Focus::List,
            help: HelpSlot::default(),
            status: None,
            close: None,
        }
    }

    pub(super) fn into_outcome(self) -> DialogOutcome {
        match self.close {
            Some(CloseRequest::Commit) => self.selector.commit(),
            Some(CloseRequest::Cancel) | None => self.selector.cancel(),
        }
    }

    fn push_output(&mut self, msg: impl Into<String>) {
        self.status = Some((StatusKind::Output, msg.into()));
    }

    fn push_error(&mut self, msg: impl Into<String>) {
        self.status = Some((StatusKind::Error, msg.into()));
    }

    /// Refresh the parameter field after the selector rewrote its text.
    fn sync_params(&mut self) {
        if self.params.buf != self.selector.state().parameter_text {
            self.params.set(self.selector.state().parameter_text.clone());
        }
    }

    fn select_row(&mut self, row: usize) {
        if self.selector.entries().is_empty() {
            return;
        }
        let row = row.min(self.selector.entries().len() - 1);
        self.selector.on_selection_changed(row);
        self.sync_params();
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.selector.entries().len();
        if len == 0 {
            return;
        }
        let next = match self.selector.state().selected_index {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(len - 1),
        };
        self.select_row(next);
    }

    fn edit_parameters(&mut self, prompter: &mut dyn ParamPrompter) {
        if self.selector.edit_parameters(prompter) {
            self.sync_params();
            self.push_output("parameters updated");
        } else {
            self.push_error("this command has no editable parameters");
        }
    }

    fn use_preset(&mut self, prompter: &mut dyn ParamPrompter) {
        if self.selector.use_preset(prompter) {
            self.sync_params();
            self.push_output("preset applied");
        } else {
            self.push_error("no presets stored for this command");
        }
    }

    fn handle_params_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Backspace => self.params.backspace(),
            KeyCode::Delete => self.params.delete(),
            KeyCode::Left => self.params.move_left(),
            KeyCode::Right => self.params.move_right(),
            KeyCode::Home => self.params.move_home(),
            KeyCode::End => self.params.move_end(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.params.insert_char(c);
            }
            _ => return,
        }
        self.selector.set_parameter_text(self.params.buf.clone());
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(PAGE_ROWS as isize)),
            KeyCode::PageDown => self.move_selection(PAGE_ROWS as isize),
            KeyCode::Home => self.select_row(0),
            KeyCode::End => self.select_row(usize::MAX),
            _ => {}
        }
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent, prompter: &mut dyn ParamPrompter) {
        if let Some(help) = self.help.0.as_mut() {
            if help.handle_key(key) {
                self.help.0 = None;
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.close = Some(CloseRequest::Cancel),
            KeyCode::Enter => self.close = Some(CloseRequest::Commit),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::List => Focus::Params,
                    Focus::Params => Focus::List,
                };
            }
            KeyCode::F(1) => self.selector.show_help(&mut self.help),
            KeyCode::Char('e') if ctrl => self.edit_parameters(prompter),
            KeyCode::Char('p') if ctrl => self.use_preset(prompter),
            _ => match self.focus {
                Focus::List => self.handle_list_key(key),
                Focus::Params => self.handle_params_key(key),
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
