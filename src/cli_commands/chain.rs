use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ChainCommands {
    /// Show the steps of the chain
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick a command and append it as a new step
    Add,
    /// Re-open a step in the command dialog and replace it on commit
    Edit {
        /// Step number as shown by `chain show`
        step: usize,
    },
    /// Remove a step
    Remove {
        /// Step number as shown by `chain show`
        step: usize,
    },
}
