use std::fs;

use anyhow::{Context, Result, anyhow};

use crate::model::{Chain, CommandStep};

use super::{LocalStore, write_atomic};

impl LocalStore {
    pub fn read_chain(&self) -> Result<Chain> {
        let path = self.root.join("chain.json");
        if !path.exists() {
            return Ok(Chain {
                version: 1,
                ..Default::default()
            });
        }
        let bytes = fs::read(&path).context("read chain.json")?;
        let chain: Chain = serde_json::from_slice(&bytes).context("parse chain.json")?;
        if chain.version != 1 {
            anyhow::bail!("unsupported chain version {}", chain.version);
        }
        Ok(chain)
    }

    pub fn write_chain(&self, chain: &Chain) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(chain).context("serialize chain")?;
        write_atomic(&self.root.join("chain.json"), &bytes).context("write chain.json")?;
        Ok(())
    }

    pub fn append_step(&self, step: CommandStep) -> Result<usize> {
        let mut chain = self.read_chain()?;
        chain.steps.push(step);
        let n = chain.steps.len();
        self.write_chain(&chain)?;
        Ok(n)
    }

    /// Steps are numbered from 1, as shown by `chain show`.
    pub fn step(&self, number: usize) -> Result<CommandStep> {
        let chain = self.read_chain()?;
        step_index(&chain, number).map(|i| chain.steps[i].clone())
    }

    pub fn replace_step(&self, number: usize, step: CommandStep) -> Result<()> {
        let mut chain = self.read_chain()?;
        let i = step_index(&chain, number)?;
        chain.steps[i] = step;
        self.write_chain(&chain)
    }

    pub fn remove_step(&self, number: usize) -> Result<CommandStep> {
        let mut chain = self.read_chain()?;
        let i = step_index(&chain, number)?;
        let removed = chain.steps.remove(i);
        self.write_chain(&chain)?;
        Ok(removed)
    }
}

fn step_index(chain: &Chain, number: usize) -> Result<usize> {
    if number == 0 || number > chain.steps.len() {
        return Err(anyhow!(
            "no step {} (chain has {} steps)",
            number,
            chain.steps.len()
        ));
    }
    Ok(number - 1)
}
