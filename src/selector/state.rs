use super::availability::ActionAvailability;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_index: Option<usize>,
    /// May name a command that is not in the catalog when seeded from outside.
    pub internal_command_name: String,
    pub display_text: String,
    pub detail_text: String,
    pub parameter_text: String,
    pub actions: ActionAvailability,
}

impl SelectionState {
    pub fn can_edit_parameters(&self) -> bool {
        self.actions.can_edit_parameters
    }

    pub fn can_use_preset(&self) -> bool {
        self.actions.can_use_preset
    }
}
