use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::entry::{CatalogEntry, Preset};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub version: u32,

    /// Catalog file, relative to the workspace root. Built-in catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Registry file, relative to the workspace root. Built-in registry when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkspaceState {
    pub version: u32,

    /// Last committed parameters, keyed by command identifier.
    #[serde(default)]
    pub params: BTreeMap<String, ParamRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParamRecord {
    pub params: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub commands: Vec<CatalogEntry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EffectDef {
    pub effect_id: String,
    pub identifier: String,

    #[serde(default)]
    pub default_params: String,

    #[serde(default)]
    pub presets: Vec<Preset>,
}
