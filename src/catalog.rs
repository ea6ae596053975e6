use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{CatalogEntry, CatalogFile};

/// Source of the commands a selector offers, in display order.
pub trait CommandCatalog {
    fn list_commands(&self) -> Vec<CatalogEntry>;
}

#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Effects and special commands shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(crate::builtin::builtin_entries())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("read catalog {}", path.display()))?;
        let file: CatalogFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse catalog {}", path.display()))?;

        let mut seen = HashSet::new();
        for entry in &file.commands {
            if !seen.insert(entry.identifier.as_str()) {
                tracing::warn!(
                    identifier = entry.identifier.as_str(),
                    path = %path.display(),
                    "duplicate catalog identifier; lookups use the first entry"
                );
            }
        }
        tracing::debug!(
            commands = file.commands.len(),
            path = %path.display(),
            "loaded catalog"
        );

        Ok(Self::new(file.commands))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl CommandCatalog for StaticCatalog {
    fn list_commands(&self) -> Vec<CatalogEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
