use serde::{Deserialize, Serialize};

use crate::content::section::ContentSection;

/// How involved a template is to fill with content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Enterprise,
}

/// The unit of opt-in/opt-out for a template.
///
/// Non-optional modules are always part of a project built from the
/// template; optional ones are added by selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub optional: bool,
    pub sections: Vec<ContentSection>,
}

impl TemplateModule {
    pub fn new(id: &str, name: &str, description: &str, optional: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            optional,
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: ContentSection) -> Self {
        self.sections.push(section);
        self
    }
}

/// A site template: the catalog entry a project starts from.
///
/// A template owns its modules by value; modules are never shared across
/// templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub preview_url: String,
    pub complexity: Complexity,
    pub features: Vec<String>,
    pub modules: Vec<TemplateModule>,
    /// Rough authoring effort for a complete content set, in minutes.
    pub estimated_content_time: u32,
    pub supported_languages: Vec<String>,
}

impl TemplateConfig {
    pub fn module(&self, module_id: &str) -> Option<&TemplateModule> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Ids of modules that are always included.
    pub fn mandatory_module_ids(&self) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|m| !m.optional)
            .map(|m| m.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_orders_simple_first() {
        assert!(Complexity::Simple < Complexity::Medium);
        assert!(Complexity::Medium < Complexity::Enterprise);
    }

    #[test]
    fn complexity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Complexity::Enterprise).unwrap(),
            "\"enterprise\""
        );
    }
}
