use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::model::{EffectDef, EffectId, Preset, RegistryFile};

/// Capability lookups keyed by command identifier and effect id.
pub trait CapabilityRegistry {
    /// Effect behind a command identifier; `None` for special commands.
    fn resolve_effect_id(&self, identifier: &str) -> Option<EffectId>;

    fn has_presets(&self, effect_id: &EffectId) -> bool;

    fn default_preset(&self, effect_id: &EffectId) -> String;

    fn presets(&self, _effect_id: &EffectId) -> Vec<Preset> {
        Vec::new()
    }
}

/// Resolves `identifier`, treating an empty effect id the same as no effect.
pub fn resolve_effect(registry: &dyn CapabilityRegistry, identifier: &str) -> Option<EffectId> {
    registry
        .resolve_effect_id(identifier)
        .filter(|id| !id.as_str().is_empty())
}

#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: Vec<EffectDef>,
}

impl EffectRegistry {
    pub fn new(effects: Vec<EffectDef>) -> Result<Self> {
        let mut ids = HashSet::new();
        for e in &effects {
            if e.effect_id.trim().is_empty() {
                bail!("effect for {:?} has an empty effect_id", e.identifier);
            }
            if !ids.insert(e.effect_id.as_str()) {
                bail!("duplicate effect_id {:?}", e.effect_id);
            }
        }
        Ok(Self { effects })
    }

    pub fn builtin() -> Self {
        Self {
            effects: crate::builtin::builtin_effects(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("read registry {}", path.display()))?;
        let file: RegistryFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse registry {}", path.display()))?;
        let reg = Self::new(file.effects)
            .with_context(|| format!("validate registry {}", path.display()))?;
        tracing::debug!(
            effects = reg.effects.len(),
            path = %path.display(),
            "loaded registry"
        );
        Ok(reg)
    }

    pub fn effects(&self) -> &[EffectDef] {
        &self.effects
    }

    fn effect(&self, effect_id: &EffectId) -> Option<&EffectDef> {
        self.effects
            .iter()
            .find(|e| e.effect_id == effect_id.as_str())
    }
}

impl CapabilityRegistry for EffectRegistry {
    fn resolve_effect_id(&self, identifier: &str) -> Option<EffectId> {
        self.effects
            .iter()
            .find(|e| e.identifier == identifier)
            .map(|e| EffectId(e.effect_id.clone()))
    }

    fn has_presets(&self, effect_id: &EffectId) -> bool {
        self.effect(effect_id).is_some_and(|e| !e.presets.is_empty())
    }

    fn default_preset(&self, effect_id: &EffectId) -> String {
        self.effect(effect_id)
            .map(|e| e.default_params.clone())
            .unwrap_or_default()
    }

    fn presets(&self, effect_id: &EffectId) -> Vec<Preset> {
        self.effect(effect_id)
            .map(|e| e.presets.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
