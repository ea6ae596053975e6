mod config;
mod entry;
mod ids;
mod step;

pub use self::config::{
    CatalogFile, EffectDef, ParamRecord, RegistryFile, WorkspaceConfig, WorkspaceState,
};
pub use self::entry::{CatalogEntry, Preset, SPECIAL_COMMAND_CATEGORY};
pub use self::ids::EffectId;
pub use self::step::{Chain, CommandStep};
