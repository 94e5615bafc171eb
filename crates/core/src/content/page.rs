use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Concrete page content, independent of theme and script.
///
/// Keys in `sections` are section role keys (e.g. "hero", "faq"); the
/// composer looks content up by role and never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    pub navigation: NavigationContent,
    pub footer: FooterContent,
    #[serde(default)]
    pub sections: HashMap<String, SectionContent>,
}

impl PageContent {
    pub fn section(&self, role_key: &str) -> Option<&SectionContent> {
        self.sections.get(role_key)
    }
}

/// Content for the fixed navigation slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContent {
    pub brand: String,
    #[serde(default)]
    pub links: Vec<ContentLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
}

/// Content for the fixed footer slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub tagline: String,
    #[serde(default)]
    pub link_groups: Vec<FooterLinkGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLinkGroup {
    pub title: String,
    #[serde(default)]
    pub links: Vec<ContentLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLink {
    pub label: String,
    pub href: String,
}

impl ContentLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Content for one main-slot section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
    /// List entries: FAQ items, feature cards, news articles, logos.
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// One entry in a section's item list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ContentItem {
    pub fn new(title: &str, body: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            body: body.map(|b| b.to_string()),
            image: None,
            href: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_lookup_by_role_key() {
        let mut content = PageContent::default();
        content.sections.insert(
            "hero".to_string(),
            SectionContent {
                headline: Some("Launch faster".to_string()),
                ..SectionContent::default()
            },
        );

        assert!(content.section("hero").is_some());
        assert!(content.section("pricing").is_none());
    }

    #[test]
    fn camel_case_wire_format() {
        let content = SectionContent {
            cta_label: Some("Get started".to_string()),
            ..SectionContent::default()
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["ctaLabel"], "Get started");
        assert!(json.get("ctaHref").is_none());
    }
}
