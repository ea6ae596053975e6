use std::path::PathBuf;

use super::*;

pub(super) struct Sources {
    pub(super) catalog: StaticCatalog,
    pub(super) registry: EffectRegistry,
}

pub(super) fn discover_workspace() -> Result<Workspace> {
    Workspace::discover(&std::env::current_dir().context("get current dir")?)
}

/// Commands that also work without a workspace fall back to built-ins.
pub(super) fn optional_workspace() -> Option<Workspace> {
    discover_workspace().ok()
}

pub(super) fn with_workspace<F>(f: F) -> Result<()>
where
    F: FnOnce(&Workspace) -> Result<()>,
{
    let ws = discover_workspace()?;
    f(&ws)
}

pub(super) fn init_logging(ws: &Workspace) {
    if let Err(err) = stepchain::logging::init_file_logging(&ws.store.log_path()) {
        eprintln!("warning: logging disabled: {:#}", err);
    }
}

/// Command-line overrides win over config.json, which wins over built-ins.
pub(super) fn load_sources(ws: Option<&Workspace>, args: &SourceArgs) -> Result<Sources> {
    let catalog = match (&args.catalog, ws) {
        (Some(path), _) => StaticCatalog::load(path)?,
        (None, Some(ws)) => ws.catalog().context("load workspace catalog")?,
        (None, None) => StaticCatalog::builtin(),
    };
    let registry = match (&args.registry, ws) {
        (Some(path), _) => EffectRegistry::load(path)?,
        (None, Some(ws)) => ws.registry().context("load workspace registry")?,
        (None, None) => EffectRegistry::builtin(),
    };
    Ok(Sources { catalog, registry })
}

pub(super) fn handle_init_command(force: bool, path: Option<PathBuf>) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir().context("get current dir")?,
    };
    Workspace::init(&root, force)?;
    println!("Initialized stepchain workspace at {}", root.display());
    Ok(())
}
