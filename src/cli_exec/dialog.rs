use stepchain::model::WorkspaceState;
use stepchain::selector::{NoParamMemory, ParamMemory};

use super::workspace::load_sources;
use super::*;

/// Opens the dialog with parameter memory from `ws` when there is one.
pub(super) fn run_dialog(
    ws: Option<&Workspace>,
    sources: &SourceArgs,
    seed: Option<&CommandStep>,
) -> Result<DialogOutcome> {
    let src = load_sources(ws, sources)?;
    let state: Option<WorkspaceState> = match ws {
        Some(ws) => Some(ws.store.read_state()?),
        None => None,
    };
    let memory: &dyn ParamMemory = match state.as_ref() {
        Some(st) => st,
        None => &NoParamMemory,
    };

    let outcome = stepchain::tui::pick_command(&src.catalog, &src.registry, memory, seed)?;

    if let (Some(ws), DialogOutcome::Committed(step)) = (ws, &outcome)
        && !step.identifier.is_empty()
    {
        ws.store
            .remember_params(step)
            .context("remember committed parameters")?;
    }
    Ok(outcome)
}

pub(super) fn print_step(step: &CommandStep, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(step).context("serialize step json")?
        );
    } else {
        println!("{}", step.summary());
    }
    Ok(())
}

pub(super) fn handle_pick_command(
    ws: Option<&Workspace>,
    sources: &SourceArgs,
    args: crate::cli_commands::local::PickArgs,
) -> Result<()> {
    let seed = args
        .command
        .map(|c| CommandStep::new(c, args.params.unwrap_or_default()));

    match run_dialog(ws, sources, seed.as_ref())? {
        DialogOutcome::Committed(step) => print_step(&step, args.json)?,
        DialogOutcome::Cancelled => println!("cancelled"),
    }
    Ok(())
}
