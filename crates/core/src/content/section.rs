use serde::{Deserialize, Serialize};

use super::field::ContentField;

/// A named group of fields inside a template module.
///
/// Repeatable sections produce N instances of the same field set (e.g. N
/// news articles), bounded by `min_items`/`max_items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub fields: Vec<ContentField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(default)]
    pub repeatable: bool,
}

impl ContentSection {
    pub fn new(id: &str, name: &str, description: &str, fields: Vec<ContentField>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            fields,
            min_items: None,
            max_items: None,
            repeatable: false,
        }
    }

    pub fn repeatable(mut self, min_items: u32, max_items: u32) -> Self {
        self.repeatable = true;
        self.min_items = Some(min_items);
        self.max_items = Some(max_items);
        self
    }

    /// Number of instances a checklist must provision for this section.
    /// Non-repeatable sections always have exactly one.
    pub fn instance_count(&self) -> u32 {
        if self.repeatable {
            self.min_items.unwrap_or(1).max(1)
        } else {
            1
        }
    }
}
