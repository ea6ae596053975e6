use anyhow::Result;

use crate::model::{CommandStep, ParamRecord, WorkspaceState};
use crate::selector::ParamMemory;

use super::super::now_ts;
use super::LocalStore;

impl LocalStore {
    /// Records the parameters of a committed step for the next dialog.
    pub fn remember_params(&self, step: &CommandStep) -> Result<()> {
        let mut st = self.read_state()?;
        if st.version != 1 {
            anyhow::bail!("unsupported workspace state version {}", st.version);
        }
        st.params.insert(
            step.identifier.clone(),
            ParamRecord {
                params: step.params.clone(),
                updated_at: now_ts(),
            },
        );
        self.write_state(&st)
    }
}

impl ParamMemory for WorkspaceState {
    fn current_params_for(&self, identifier: &str) -> String {
        self.params
            .get(identifier)
            .map(|r| r.params.clone())
            .unwrap_or_default()
    }
}
