use crate::registry::{CapabilityRegistry, resolve_effect};

/// Which of the two context actions a command allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionAvailability {
    pub can_edit_parameters: bool,
    pub can_use_preset: bool,
}

impl ActionAvailability {
    /// Pure lookup; the frontend decides how disabled actions look.
    pub fn compute(registry: &dyn CapabilityRegistry, identifier: &str) -> Self {
        match resolve_effect(registry, identifier) {
            Some(id) => Self {
                can_edit_parameters: true,
                can_use_preset: registry.has_presets(&id),
            },
            None => Self::default(),
        }
    }
}
