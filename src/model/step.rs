use serde::{Deserialize, Serialize};

/// A committed `(identifier, params)` pair: one step of a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStep {
    pub identifier: String,
    #[serde(default)]
    pub params: String,
}

impl CommandStep {
    pub fn new(identifier: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            params: params.into(),
        }
    }

    /// `Identifier: params`, or the bare identifier when there are no params.
    pub fn summary(&self) -> String {
        if self.params.is_empty() {
            self.identifier.clone()
        } else {
            format!("{}: {}", self.identifier, self.params)
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Chain {
    pub version: u32,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub steps: Vec<CommandStep>,
}
