use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Sends `tracing` output to `path`; the terminal belongs to the TUI.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("install log subscriber: {err}"))?;

    Ok(())
}
