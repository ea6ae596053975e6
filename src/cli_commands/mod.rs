use clap::Subcommand;

pub(crate) mod chain;
pub(crate) mod local;

pub(crate) use self::chain::ChainCommands;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a workspace (.stepchain)
    Init(local::InitArgs),

    /// List the command catalog
    Commands(local::CommandsArgs),

    /// Open the command dialog and print the chosen step
    Pick(local::PickArgs),

    /// Manage the chain of steps
    Chain {
        #[command(subcommand)]
        command: ChainCommands,
    },
}
