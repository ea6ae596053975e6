mod cli_commands;
mod cli_exec;
mod cli_runtime;

pub(crate) use cli_commands::{ChainCommands, Commands};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
