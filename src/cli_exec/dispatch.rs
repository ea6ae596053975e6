use super::chain::handle_chain_command;
use super::dialog::handle_pick_command;
use super::listing::handle_commands_command;
use super::workspace::{handle_init_command, init_logging, optional_workspace, with_workspace};
use super::*;

pub(super) fn handle_command(command: Commands, sources: &SourceArgs) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(args.force, args.path)?,
        Commands::Commands(args) => {
            let ws = optional_workspace();
            handle_commands_command(ws.as_ref(), sources, args.json)?
        }
        Commands::Pick(args) => {
            let ws = optional_workspace();
            if let Some(ws) = ws.as_ref() {
                init_logging(ws);
            }
            handle_pick_command(ws.as_ref(), sources, args)?
        }
        Commands::Chain { command } => with_workspace(|ws| {
            init_logging(ws);
            handle_chain_command(ws, sources, command)
        })?,
    }
    Ok(())
}
