use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser};

use crate::Commands;

#[derive(Parser)]
#[command(name = "stepchain")]
#[command(about = "Build batch-processing chains one command at a time", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    sources: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
pub(crate) struct SourceArgs {
    /// Catalog file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) catalog: Option<PathBuf>,

    /// Registry file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) registry: Option<PathBuf>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::cli_exec::handle_command(cli.command, &cli.sources)
}
