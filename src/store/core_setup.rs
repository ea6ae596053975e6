use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::model::{Chain, WorkspaceConfig, WorkspaceState};

use super::{LocalStore, STORE_DIR, write_atomic};

impl LocalStore {
    pub fn store_dir(root: &Path) -> std::path::PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(workspace_root: &Path) -> Result<Self> {
        let root = Self::store_dir(workspace_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `stepchain init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    pub fn init(workspace_root: &Path, force: bool) -> Result<Self> {
        let root = Self::store_dir(workspace_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }

        fs::create_dir_all(&root).context("create store dir")?;
        let store = Self { root };

        store.write_config(&WorkspaceConfig {
            version: 1,
            catalog: None,
            registry: None,
        })?;
        store.write_state(&WorkspaceState {
            version: 1,
            ..Default::default()
        })?;
        store.write_chain(&Chain {
            version: 1,
            ..Default::default()
        })?;

        Ok(store)
    }

    pub fn read_config(&self) -> Result<WorkspaceConfig> {
        let bytes = fs::read(self.root.join("config.json")).context("read config.json")?;
        let cfg: WorkspaceConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported workspace config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &WorkspaceConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }
}
