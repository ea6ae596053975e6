use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::catalog::StaticCatalog;
use crate::registry::EffectRegistry;
use crate::store::LocalStore;

#[derive(Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub store: LocalStore,
}

impl Workspace {
    pub fn init(root: &Path, force: bool) -> Result<Self> {
        let store = LocalStore::init(root, force)?;
        Ok(Self {
            root: root.to_path_buf(),
            store,
        })
    }

    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if LocalStore::store_dir(dir).is_dir() {
                let store = LocalStore::open(dir)?;
                return Ok(Self {
                    root: dir.to_path_buf(),
                    store,
                });
            }
        }
        Err(anyhow!("No .stepchain directory found (run `stepchain init`)"))
    }

    /// Catalog named by config.json, or the built-in one.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        let cfg = self.store.read_config()?;
        match cfg.catalog {
            Some(rel) => StaticCatalog::load(&self.root.join(rel)),
            None => Ok(StaticCatalog::builtin()),
        }
    }

    /// Registry named by config.json, or the built-in one.
    pub fn registry(&self) -> Result<EffectRegistry> {
        let cfg = self.store.read_config()?;
        match cfg.registry {
            Some(rel) => EffectRegistry::load(&self.root.join(rel)),
            None => Ok(EffectRegistry::builtin()),
        }
    }
}
