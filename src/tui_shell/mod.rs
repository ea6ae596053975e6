use anyhow::Result;

use crate::catalog::CommandCatalog;
use crate::model::CommandStep;
use crate::registry::CapabilityRegistry;
use crate::selector::{DialogOutcome, ParamMemory};

mod app;
mod input;
mod modal;

pub(crate) fn run_dialog(
    catalog: &dyn CommandCatalog,
    registry: &dyn CapabilityRegistry,
    memory: &dyn ParamMemory,
    seed: Option<&CommandStep>,
) -> Result<DialogOutcome> {
    app::run(catalog, registry, memory, seed)
}
