//! Script engine: narrative sequencing of page sections.
//!
//! A script is the ordered list of section roles a page will use, derived
//! from who the page is for and what it should make them do. The mapping
//! is a fixed lookup table — same inputs, same script — so pages can be
//! regenerated reproducibly.

use serde::{Deserialize, Serialize};

/// Section kinds a script can sequence.
///
/// Navigation and footer are deliberately not representable here: they are
/// fixed slots owned by the composer, never narrative choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    Trust,
    Features,
    Content,
    Pricing,
    Faq,
    Cta,
}

impl SectionType {
    /// Content-lookup key for this section's role.
    pub fn role_key(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Trust => "trust",
            SectionType::Features => "features",
            SectionType::Content => "content",
            SectionType::Pricing => "pricing",
            SectionType::Faq => "faq",
            SectionType::Cta => "cta",
        }
    }

    /// The AIDA narrative stage this section serves.
    pub fn aida_stage(&self) -> AidaStage {
        match self {
            SectionType::Hero => AidaStage::Attention,
            SectionType::Trust => AidaStage::Interest,
            SectionType::Features => AidaStage::Interest,
            SectionType::Content => AidaStage::Desire,
            SectionType::Pricing => AidaStage::Desire,
            SectionType::Faq => AidaStage::Desire,
            SectionType::Cta => AidaStage::Action,
        }
    }
}

/// Classic attention → interest → desire → action narrative arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AidaStage {
    Attention,
    Interest,
    Desire,
    Action,
}

/// Who the page is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Consumer,
    Business,
    Developer,
}

/// What the page should make the visitor do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    LeadCapture,
    DirectSale,
    Signup,
    Awareness,
}

/// One entry of a page script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScript {
    pub section_type: SectionType,
    pub stage: AidaStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl SectionScript {
    fn new(section_type: SectionType) -> Self {
        Self {
            section_type,
            stage: section_type.aida_stage(),
            variant: None,
        }
    }

    fn with_variant(section_type: SectionType, variant: &str) -> Self {
        Self {
            variant: Some(variant.to_string()),
            ..Self::new(section_type)
        }
    }

    pub fn role_key(&self) -> &'static str {
        self.section_type.role_key()
    }
}

/// An ordered narrative skeleton for a page, without content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageScript {
    pub audience: Audience,
    pub goal: Goal,
    pub sections: Vec<SectionScript>,
}

impl PageScript {
    pub fn section_types(&self) -> Vec<SectionType> {
        self.sections.iter().map(|s| s.section_type).collect()
    }
}

/// Map an audience/goal pair to its narrative sequence.
///
/// The table follows AIDA: Hero opens, Trust/Features build interest,
/// Content/Pricing build desire, and FAQ sits directly before the closing
/// CTA to pre-empt objections.
pub fn generate_script(audience: Audience, goal: Goal) -> PageScript {
    use SectionType::*;

    let sequence: &[SectionType] = match (audience, goal) {
        (Audience::Consumer, Goal::DirectSale) => &[Hero, Features, Trust, Pricing, Faq, Cta],
        (Audience::Consumer, Goal::LeadCapture) => &[Hero, Features, Trust, Content, Faq, Cta],
        (Audience::Consumer, Goal::Signup) => &[Hero, Features, Content, Faq, Cta],
        (Audience::Consumer, Goal::Awareness) => &[Hero, Content, Features, Faq, Cta],

        (Audience::Business, Goal::DirectSale) => &[Hero, Trust, Features, Pricing, Faq, Cta],
        (Audience::Business, Goal::LeadCapture) => &[Hero, Trust, Features, Content, Faq, Cta],
        (Audience::Business, Goal::Signup) => &[Hero, Trust, Features, Faq, Cta],
        (Audience::Business, Goal::Awareness) => &[Hero, Trust, Content, Faq, Cta],

        (Audience::Developer, Goal::DirectSale) => &[Hero, Features, Content, Pricing, Faq, Cta],
        (Audience::Developer, Goal::LeadCapture) => &[Hero, Features, Content, Faq, Cta],
        (Audience::Developer, Goal::Signup) => &[Hero, Content, Features, Faq, Cta],
        (Audience::Developer, Goal::Awareness) => &[Hero, Content, Trust, Faq, Cta],
    };

    let hero_variant = match audience {
        Audience::Consumer => "spotlight",
        Audience::Business => "split-screen",
        Audience::Developer => "minimal",
    };

    let sections = sequence
        .iter()
        .map(|&section_type| {
            if section_type == Hero {
                SectionScript::with_variant(section_type, hero_variant)
            } else {
                SectionScript::new(section_type)
            }
        })
        .collect();

    PageScript {
        audience,
        goal,
        sections,
    }
}
