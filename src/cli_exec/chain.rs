use super::dialog::{print_step, run_dialog};
use super::*;

pub(super) fn handle_chain_command(
    ws: &Workspace,
    sources: &SourceArgs,
    command: ChainCommands,
) -> Result<()> {
    match command {
        ChainCommands::Show { json } => {
            let chain = ws.store.read_chain()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&chain).context("serialize chain json")?
                );
            } else if chain.steps.is_empty() {
                println!("(empty chain)");
            } else {
                for (i, step) in chain.steps.iter().enumerate() {
                    println!("{:>3}  {}", i + 1, step.summary());
                }
            }
        }
        ChainCommands::Add => match run_dialog(Some(ws), sources, None)? {
            DialogOutcome::Committed(step) => {
                let step = require_command(step)?;
                let n = ws.store.append_step(step.clone())?;
                tracing::info!(step = n, identifier = step.identifier.as_str(), "appended step");
                print!("added step {}: ", n);
                print_step(&step, false)?;
            }
            DialogOutcome::Cancelled => println!("cancelled; chain unchanged"),
        },
        ChainCommands::Edit { step: n } => {
            let current = ws.store.step(n)?;
            match run_dialog(Some(ws), sources, Some(&current))? {
                DialogOutcome::Committed(step) => {
                    let step = require_command(step)?;
                    ws.store.replace_step(n, step.clone())?;
                    tracing::info!(step = n, identifier = step.identifier.as_str(), "replaced step");
                    print!("updated step {}: ", n);
                    print_step(&step, false)?;
                }
                DialogOutcome::Cancelled => println!("cancelled; chain unchanged"),
            }
        }
        ChainCommands::Remove { step: n } => {
            let removed = ws.store.remove_step(n)?;
            tracing::info!(step = n, identifier = removed.identifier.as_str(), "removed step");
            println!("removed step {}: {}", n, removed.summary());
        }
    }
    Ok(())
}

fn require_command(step: CommandStep) -> Result<CommandStep> {
    if step.identifier.is_empty() {
        anyhow::bail!("no command selected; chain unchanged");
    }
    Ok(step)
}
