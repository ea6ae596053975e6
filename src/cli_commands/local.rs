use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize if .stepchain already exists
    #[arg(long)]
    pub(crate) force: bool,
    /// Path to initialize (defaults to current directory)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct CommandsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct PickArgs {
    /// Preselect this command identifier
    #[arg(long)]
    pub(crate) command: Option<String>,
    /// Initial parameters (used with --command)
    #[arg(long, requires = "command")]
    pub(crate) params: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
