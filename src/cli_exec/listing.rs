use serde::Serialize;

use stepchain::catalog::CommandCatalog;
use stepchain::selector::ActionAvailability;

use super::workspace::load_sources;
use super::*;

#[derive(Serialize)]
struct CommandRow {
    display_name: String,
    identifier: String,
    category: String,
    can_edit_parameters: bool,
    can_use_preset: bool,
}

pub(super) fn handle_commands_command(
    ws: Option<&Workspace>,
    sources: &SourceArgs,
    json: bool,
) -> Result<()> {
    let src = load_sources(ws, sources)?;
    let rows: Vec<CommandRow> = src
        .catalog
        .list_commands()
        .into_iter()
        .map(|e| {
            let actions = ActionAvailability::compute(&src.registry, &e.identifier);
            CommandRow {
                display_name: e.display_name,
                identifier: e.identifier,
                category: e.category,
                can_edit_parameters: actions.can_edit_parameters,
                can_use_preset: actions.can_use_preset,
            }
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize commands json")?
        );
        return Ok(());
    }

    for r in rows {
        let marks = format!(
            "{}{}",
            if r.can_edit_parameters { "E" } else { "-" },
            if r.can_use_preset { "P" } else { "-" }
        );
        println!(
            "{} {:<20} {:<16} {}",
            marks, r.display_name, r.identifier, r.category
        );
    }
    Ok(())
}
