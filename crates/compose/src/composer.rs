//! Page composer: merges a script, content and a theme into a render tree.
//!
//! The output is a structural description consumed by an external renderer;
//! no layout happens here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pageflow_core::content::page::{ContentLink, FooterLinkGroup, PageContent, SectionContent};
use pageflow_core::theme::ThemeConfig;

use crate::script::{AidaStage, PageScript, SectionType};

#[derive(Debug, Error, PartialEq)]
pub enum ComposeError {
    #[error("no content provided for role '{0}'")]
    MissingContentForRole(String),
}

/// How the composer treats script entries with no matching content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComposeMode {
    /// Fail on the first role without content.
    Strict,
    /// Skip roles without content, logging each skip.
    Lenient,
}

/// A composed main-slot section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSection {
    pub section_type: SectionType,
    pub stage: AidaStage,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementSlot {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSlot {
    pub brand: String,
    pub links: Vec<ContentLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSlot {
    pub tagline: String,
    pub link_groups: Vec<FooterLinkGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<String>,
}

/// The renderable page structure.
///
/// The slot layout is fixed by this type: an optional announcement, exactly
/// one navigation, the script-driven main run, exactly one footer. Scripts
/// and content cannot change that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTree {
    pub theme_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<AnnouncementSlot>,
    pub navigation: NavigationSlot,
    pub main: Vec<RenderSection>,
    pub footer: FooterSlot,
}

/// Merge a script with content and a theme.
///
/// Pure transform: the same inputs always produce the same tree.
pub fn compose(
    script: &PageScript,
    content: &PageContent,
    theme: &ThemeConfig,
    mode: ComposeMode,
) -> Result<RenderTree, ComposeError> {
    let mut main = Vec::with_capacity(script.sections.len());

    for entry in &script.sections {
        let role = entry.role_key();
        match content.section(role) {
            Some(section_content) => main.push(RenderSection {
                section_type: entry.section_type,
                stage: entry.stage,
                role: role.to_string(),
                variant: entry.variant.clone(),
                content: section_content.clone(),
            }),
            None if mode == ComposeMode::Strict => {
                return Err(ComposeError::MissingContentForRole(role.to_string()));
            }
            None => {
                tracing::warn!(%role, "skipping section with no content");
            }
        }
    }

    Ok(RenderTree {
        theme_id: theme.id.clone(),
        announcement: content
            .announcement
            .as_ref()
            .map(|text| AnnouncementSlot { text: text.clone() }),
        navigation: NavigationSlot {
            brand: content.navigation.brand.clone(),
            links: content.navigation.links.clone(),
            cta_label: content.navigation.cta_label.clone(),
        },
        main,
        footer: FooterSlot {
            tagline: content.footer.tagline.clone(),
            link_groups: content.footer.link_groups.clone(),
            legal: content.footer.legal.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_page_content;
    use crate::script::{generate_script, Audience, Goal};
    use pageflow_core::theme::ThemeRegistry;

    fn theme() -> ThemeConfig {
        ThemeRegistry::builtin().get("dark-cyan").unwrap().clone()
    }

    #[test]
    fn composes_every_script_section_from_sample_content() {
        let script = generate_script(Audience::Business, Goal::DirectSale);
        let content = sample_page_content();

        let tree = compose(&script, &content, &theme(), ComposeMode::Strict).unwrap();

        assert_eq!(tree.main.len(), script.sections.len());
        assert_eq!(tree.theme_id, "dark-cyan");
        let roles: Vec<&str> = tree.main.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles[0], "hero");
        assert_eq!(roles[roles.len() - 1], "cta");
    }

    #[test]
    fn strict_mode_names_the_missing_role() {
        let script = generate_script(Audience::Business, Goal::DirectSale);
        let mut content = sample_page_content();
        content.sections.remove("pricing");

        let err = compose(&script, &content, &theme(), ComposeMode::Strict).unwrap_err();
        assert_eq!(err, ComposeError::MissingContentForRole("pricing".to_string()));
    }

    #[test]
    fn lenient_mode_skips_missing_roles() {
        let script = generate_script(Audience::Business, Goal::DirectSale);
        let mut content = sample_page_content();
        content.sections.remove("pricing");

        let tree = compose(&script, &content, &theme(), ComposeMode::Lenient).unwrap();
        assert_eq!(tree.main.len(), script.sections.len() - 1);
        assert!(tree.main.iter().all(|s| s.role != "pricing"));
    }

    #[test]
    fn slot_order_is_fixed_regardless_of_script() {
        // The tree shape itself guarantees one navigation and one footer;
        // this pins the serialized field order an external renderer sees.
        let script = generate_script(Audience::Consumer, Goal::Awareness);
        let tree = compose(&script, &sample_page_content(), &theme(), ComposeMode::Strict).unwrap();

        let json = serde_json::to_string(&tree).unwrap();
        let nav_pos = json.find("\"navigation\"").unwrap();
        let main_pos = json.find("\"main\"").unwrap();
        let footer_pos = json.find("\"footer\"").unwrap();
        assert!(nav_pos < main_pos);
        assert!(main_pos < footer_pos);
    }

    #[test]
    fn announcement_slot_is_optional() {
        let script = generate_script(Audience::Consumer, Goal::Signup);
        let mut content = sample_page_content();
        content.announcement = None;

        let tree = compose(&script, &content, &theme(), ComposeMode::Strict).unwrap();
        assert!(tree.announcement.is_none());
    }

    #[test]
    fn composition_is_deterministic() {
        let script = generate_script(Audience::Developer, Goal::LeadCapture);
        let content = sample_page_content();
        let a = compose(&script, &content, &theme(), ComposeMode::Strict).unwrap();
        let b = compose(&script, &content, &theme(), ComposeMode::Strict).unwrap();
        assert_eq!(a, b);
    }
}
