//! Checklist generation: from a template and a module selection to the
//! full, deduplicated list of content requirements.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::key::RequirementKey;
use crate::content::field::{FieldType, FieldValidation};
use crate::template::config::TemplateConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ChecklistError {
    #[error("unknown module id '{0}'")]
    InvalidModuleId(String),
}

/// A single content field demanded by one or more modules, after
/// deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequirement {
    pub key: RequirementKey,
    /// First module (in template declaration order) that demands this field.
    pub module_id: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

/// The full requirement set for a chosen module selection.
///
/// Derived, never stored: regenerate whenever the selection changes.
/// Ordering is stable — module declaration order, then section order, then
/// field order, then instance index — so checklists can be displayed and
/// diffed deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContentChecklist {
    pub template_id: String,
    pub requirements: Vec<ContentRequirement>,
}

impl ProjectContentChecklist {
    /// Generate the checklist for `template` with the given optional-module
    /// selection. Non-optional modules are always included.
    pub fn generate(
        template: &TemplateConfig,
        selected_module_ids: &HashSet<String>,
    ) -> Result<Self, ChecklistError> {
        for id in selected_module_ids {
            if template.module(id).is_none() {
                return Err(ChecklistError::InvalidModuleId(id.clone()));
            }
        }

        // First pass: merge duplicate {section, field} declarations across
        // modules. First declaration wins position and module attribution;
        // `required` is OR-ed.
        struct Merged<'a> {
            module_id: &'a str,
            section: &'a crate::content::section::ContentSection,
            field: &'a crate::content::field::ContentField,
            required: bool,
        }

        let mut order: Vec<(String, String)> = Vec::new();
        let mut merged: HashMap<(String, String), Merged<'_>> = HashMap::new();

        for module in &template.modules {
            if module.optional && !selected_module_ids.contains(&module.id) {
                continue;
            }
            for section in &module.sections {
                for field in &section.fields {
                    let slot = (section.id.clone(), field.id.clone());
                    match merged.get_mut(&slot) {
                        Some(existing) => {
                            existing.required = existing.required || field.required;
                        }
                        None => {
                            order.push(slot.clone());
                            merged.insert(
                                slot,
                                Merged {
                                    module_id: &module.id,
                                    section,
                                    field,
                                    required: field.required,
                                },
                            );
                        }
                    }
                }
            }
        }

        // Second pass: expand repeatable sections into indexed instances.
        let mut requirements = Vec::new();
        for slot in &order {
            let entry = &merged[slot];
            let instances = entry.section.instance_count();
            for index in 0..instances {
                let key = if entry.section.repeatable {
                    RequirementKey::instanced(&entry.section.id, &entry.field.id, index)
                } else {
                    RequirementKey::new(&entry.section.id, &entry.field.id)
                };
                requirements.push(ContentRequirement {
                    key,
                    module_id: entry.module_id.to_string(),
                    label: entry.field.label.clone(),
                    field_type: entry.field.field_type,
                    required: entry.required,
                    validation: entry.field.validation.clone(),
                });
            }
        }

        tracing::debug!(
            template = %template.id,
            requirements = requirements.len(),
            "generated content checklist"
        );

        Ok(Self {
            template_id: template.id.clone(),
            requirements,
        })
    }

    pub fn required(&self) -> impl Iterator<Item = &ContentRequirement> {
        self.requirements.iter().filter(|r| r.required)
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
