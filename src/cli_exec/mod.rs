use anyhow::{Context, Result};

use stepchain::catalog::StaticCatalog;
use stepchain::model::CommandStep;
use stepchain::registry::EffectRegistry;
use stepchain::selector::DialogOutcome;
use stepchain::workspace::Workspace;

use crate::cli_runtime::SourceArgs;
use crate::{ChainCommands, Commands};

mod chain;
mod dialog;
mod dispatch;
mod listing;
mod workspace;

pub(super) fn handle_command(command: Commands, sources: &SourceArgs) -> Result<()> {
    dispatch::handle_command(command, sources)
}
