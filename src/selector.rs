//! Selection model of the "Select Command" dialog.
//!
//! [`CommandSelector`] keeps the list selection, the shown command name and
//! details, the parameter string and the enablement of the two context
//! actions consistent. It knows nothing about terminals; frontends feed it
//! list events and render [`SelectionState`].

use crate::catalog::CommandCatalog;
use crate::model::{CatalogEntry, CommandStep};
use crate::registry::{CapabilityRegistry, resolve_effect};

mod availability;
mod state;

pub use self::availability::ActionAvailability;
pub use self::state::SelectionState;

/// Help page shown for the dialog.
pub const HELP_PAGE: &str = "Select Command";

/// Parameters last used for a command, empty when there are none.
pub trait ParamMemory {
    fn current_params_for(&self, identifier: &str) -> String;
}

/// Memory that never remembers anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoParamMemory;

impl ParamMemory for NoParamMemory {
    fn current_params_for(&self, _identifier: &str) -> String {
        String::new()
    }
}

/// Interactive editors. Both block until the user is done and return the
/// resulting parameter string (the input unchanged when the user backs out).
pub trait ParamPrompter {
    fn prompt_for_params(&mut self, identifier: &str, current: &str) -> String;
    fn prompt_for_preset(&mut self, identifier: &str, current: &str) -> String;
}

pub trait HelpViewer {
    fn show_help(&mut self, page: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Committed(CommandStep),
    Cancelled,
}

pub struct CommandSelector<'a> {
    catalog: &'a dyn CommandCatalog,
    registry: &'a dyn CapabilityRegistry,
    memory: &'a dyn ParamMemory,
    entries: Vec<CatalogEntry>,
    state: SelectionState,
}

impl<'a> CommandSelector<'a> {
    /// Creates an empty selector. The list stays empty until [`Self::load_catalog`].
    pub fn new(
        catalog: &'a dyn CommandCatalog,
        registry: &'a dyn CapabilityRegistry,
        memory: &'a dyn ParamMemory,
    ) -> Self {
        Self {
            catalog,
            registry,
            memory,
            entries: Vec::new(),
            state: SelectionState::default(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Display names in list order.
    pub fn list_items(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.display_name.as_str())
    }

    pub fn load_catalog(&mut self) {
        self.entries = self.catalog.list_commands();
        self.state.selected_index = None;
        tracing::debug!(commands = self.entries.len(), "loaded command list");
    }

    pub fn on_selection_changed(&mut self, index: usize) {
        let Some(entry) = self.entries.get(index) else {
            tracing::warn!(
                index,
                len = self.entries.len(),
                "selection index out of range; ignored"
            );
            return;
        };

        self.state.selected_index = Some(index);
        self.state.actions = ActionAvailability::compute(self.registry, &entry.identifier);

        // Repeated notifications for the same row must not reload parameters.
        if entry.display_name == self.state.display_text {
            return;
        }

        self.state.display_text = entry.display_name.clone();
        self.state.internal_command_name = entry.identifier.clone();

        let mut params = self.memory.current_params_for(&entry.identifier);
        if params.is_empty()
            && let Some(id) = resolve_effect(self.registry, &entry.identifier)
        {
            params = self.registry.default_preset(&id);
        }
        self.state.parameter_text = params;
        self.state.detail_text = entry.detail_text();

        tracing::debug!(
            index,
            identifier = entry.identifier.as_str(),
            can_edit = self.state.actions.can_edit_parameters,
            can_preset = self.state.actions.can_use_preset,
            "selected command"
        );
    }

    /// Seeds the dialog from an existing chain step. `identifier` need not be
    /// in the catalog.
    pub fn set_command_and_params(&mut self, identifier: &str, params: &str) {
        self.state.parameter_text = params.to_string();
        self.state.internal_command_name = identifier.to_string();

        let found = self
            .entries
            .iter()
            .position(|e| e.identifier == identifier);
        match found {
            None => {
                tracing::debug!(identifier, "seeded command not in catalog");
                self.state.display_text = identifier.to_string();
            }
            Some(i) => {
                let entry = &self.entries[i];
                self.state.display_text = entry.display_name.clone();
                self.state.detail_text = entry.detail_text();
                self.state.selected_index = Some(i);
            }
        }
        self.state.actions = ActionAvailability::compute(self.registry, identifier);
    }

    /// Replaces the parameter string with user input.
    pub fn set_parameter_text(&mut self, text: impl Into<String>) {
        self.state.parameter_text = text.into();
    }

    /// Runs the parameter editor. Returns false while editing is unavailable.
    pub fn edit_parameters(&mut self, prompter: &mut dyn ParamPrompter) -> bool {
        if !self.state.actions.can_edit_parameters {
            return false;
        }
        let edited = prompter.prompt_for_params(
            &self.state.internal_command_name,
            &self.state.parameter_text,
        );
        self.state.parameter_text = edited.trim_end().to_string();
        true
    }

    /// Runs the preset picker. Returns false while presets are unavailable.
    pub fn use_preset(&mut self, prompter: &mut dyn ParamPrompter) -> bool {
        if !self.state.actions.can_use_preset {
            return false;
        }
        let preset = prompter.prompt_for_preset(
            &self.state.internal_command_name,
            &self.state.parameter_text,
        );
        self.state.parameter_text = preset.trim_end().to_string();
        true
    }

    pub fn show_help(&self, viewer: &mut dyn HelpViewer) {
        viewer.show_help(HELP_PAGE);
    }

    /// The step the dialog would commit right now.
    pub fn pending_step(&self) -> CommandStep {
        CommandStep::new(
            self.state.internal_command_name.trim(),
            self.state.parameter_text.trim_end(),
        )
    }

    pub fn commit(self) -> DialogOutcome {
        let step = self.pending_step();
        tracing::info!(
            identifier = step.identifier.as_str(),
            params = step.params.as_str(),
            "committed command"
        );
        DialogOutcome::Committed(step)
    }

    pub fn cancel(self) -> DialogOutcome {
        tracing::debug!("selection cancelled");
        DialogOutcome::Cancelled
    }
}

#[cfg(test)]
#[path = "tests/selector/selector_tests.rs"]
mod tests;
