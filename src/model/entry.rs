use serde::{Deserialize, Serialize};

/// Category shown for commands that are not registry effects.
pub const SPECIAL_COMMAND_CATEGORY: &str = "Special Command";

/// One selectable command of the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub display_name: String,
    pub identifier: String,
    pub category: String,
}

impl CatalogEntry {
    pub fn new(
        display_name: impl Into<String>,
        identifier: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            identifier: identifier.into(),
            category: category.into(),
        }
    }

    /// Text for the details box: identifier and category on separate lines.
    pub fn detail_text(&self) -> String {
        format!("{}\n{}", self.identifier, self.category)
    }
}

/// A named parameter string stored for an effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub params: String,
}
