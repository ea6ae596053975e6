use anyhow::Result;

use crate::catalog::CommandCatalog;
use crate::model::CommandStep;
use crate::registry::CapabilityRegistry;
use crate::selector::{DialogOutcome, ParamMemory};

/// Runs the "Select Command" dialog on the terminal until the user commits or
/// cancels. `seed` preselects an existing step.
pub fn pick_command(
    catalog: &dyn CommandCatalog,
    registry: &dyn CapabilityRegistry,
    memory: &dyn ParamMemory,
    seed: Option<&CommandStep>,
) -> Result<DialogOutcome> {
    crate::tui_shell::run_dialog(catalog, registry, memory, seed)
}
