//! Static template catalog.
//!
//! Templates are authored data loaded at startup; nothing here is
//! persisted or mutated after construction.

use super::config::{Complexity, TemplateConfig, TemplateModule};
use crate::content::field::{ContentField, FieldType, FieldValidation};
use crate::content::section::ContentSection;

/// Catalog of site templates, looked up by id.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<TemplateConfig>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<TemplateConfig>) -> Self {
        Self { templates }
    }

    /// The built-in catalog shipped with the service.
    pub fn builtin() -> Self {
        Self::new(vec![launchpad_template(), horizon_template()])
    }

    pub fn get(&self, template_id: &str) -> Option<&TemplateConfig> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    pub fn all(&self) -> &[TemplateConfig] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn hero_module() -> TemplateModule {
    TemplateModule::new("hero", "Hero", "Above-the-fold opening section", false).with_section(
        ContentSection::new(
            "hero",
            "Hero",
            "Headline, supporting copy and key visual",
            vec![
                ContentField::new("headline", "Headline", FieldType::Text, true)
                    .with_validation(FieldValidation::text(Some(8), Some(80)))
                    .with_placeholder("Launch your site in days, not months"),
                ContentField::new("subheadline", "Subheadline", FieldType::Textarea, false)
                    .with_validation(FieldValidation::text(None, Some(200))),
                ContentField::new("image", "Key visual", FieldType::Image, true)
                    .with_validation(FieldValidation::image(1200, 600, 2048, &["jpg", "png", "webp"]))
                    .with_help_text("Shown full-width behind the headline"),
            ],
        ),
    )
}

fn cta_module() -> TemplateModule {
    TemplateModule::new("cta", "Call to action", "Closing conversion banner", false).with_section(
        ContentSection::new(
            "cta",
            "Call to action",
            "Final nudge with a single action",
            vec![
                ContentField::new("headline", "CTA headline", FieldType::Text, true)
                    .with_validation(FieldValidation::text(Some(4), Some(60))),
                ContentField::new("buttonLabel", "Button label", FieldType::Text, true)
                    .with_validation(FieldValidation::text(Some(2), Some(24))),
                ContentField::new("buttonHref", "Button target", FieldType::Text, false),
            ],
        ),
    )
}

fn trust_module() -> TemplateModule {
    TemplateModule::new("trust", "Trust", "Logos and social proof", true).with_section(
        ContentSection::new(
            "trust",
            "Trust bar",
            "Customer logos or short testimonials",
            vec![
                ContentField::new("logo", "Customer logo", FieldType::Image, true)
                    .with_validation(FieldValidation::image(200, 80, 256, &["png", "svg", "webp"])),
                ContentField::new("caption", "Logo caption", FieldType::Text, false),
            ],
        )
        .repeatable(3, 8),
    )
}

fn features_module() -> TemplateModule {
    TemplateModule::new("features", "Features", "Product capability grid", false).with_section(
        ContentSection::new(
            "features",
            "Feature cards",
            "One card per capability",
            vec![
                ContentField::new("title", "Feature title", FieldType::Text, true)
                    .with_validation(FieldValidation::text(Some(3), Some(40))),
                ContentField::new("body", "Feature description", FieldType::Textarea, true)
                    .with_validation(FieldValidation::text(Some(10), Some(240))),
                ContentField::new("icon", "Icon", FieldType::Image, false)
                    .with_validation(FieldValidation::image(64, 64, 64, &["png", "svg"])),
            ],
        )
        .repeatable(3, 6),
    )
}

fn pricing_module() -> TemplateModule {
    TemplateModule::new("pricing", "Pricing", "Plan comparison cards", true).with_section(
        ContentSection::new(
            "pricing",
            "Pricing plans",
            "One card per plan",
            vec![
                ContentField::new("name", "Plan name", FieldType::Text, true),
                ContentField::new("price", "Monthly price", FieldType::Number, true),
                ContentField::new("summary", "Plan summary", FieldType::Textarea, true)
                    .with_validation(FieldValidation::text(Some(10), Some(160))),
            ],
        )
        .repeatable(2, 4),
    )
}

fn faq_module() -> TemplateModule {
    TemplateModule::new("faq", "FAQ", "Objection-handling accordion", true).with_section(
        ContentSection::new(
            "faq",
            "Questions",
            "Question and answer pairs",
            vec![
                ContentField::new("question", "Question", FieldType::Text, true)
                    .with_validation(FieldValidation::text(Some(8), Some(120))),
                ContentField::new("answer", "Answer", FieldType::RichText, true)
                    .with_validation(FieldValidation::text(Some(20), Some(600))),
            ],
        )
        .repeatable(4, 10),
    )
}

fn news_module() -> TemplateModule {
    TemplateModule::new("news", "News", "Article teasers", true).with_section(
        ContentSection::new(
            "news",
            "Articles",
            "Latest company or product news",
            vec![
                ContentField::new("title", "Article title", FieldType::Text, true)
                    .with_validation(FieldValidation::text(Some(8), Some(100))),
                ContentField::new("excerpt", "Excerpt", FieldType::Textarea, true)
                    .with_validation(FieldValidation::text(Some(20), Some(280))),
                ContentField::new("cover", "Cover image", FieldType::Image, false)
                    .with_validation(FieldValidation::image(800, 450, 1024, &["jpg", "webp"])),
            ],
        )
        .repeatable(2, 6),
    )
}

/// Single-page launch template: hero + CTA, optional trust and FAQ.
fn launchpad_template() -> TemplateConfig {
    TemplateConfig {
        id: "launchpad".to_string(),
        name: "Launchpad".to_string(),
        thumbnail: "/templates/launchpad/thumb.webp".to_string(),
        preview_url: "/templates/launchpad/preview".to_string(),
        complexity: Complexity::Simple,
        features: vec![
            "single-page".to_string(),
            "waitlist-ready".to_string(),
        ],
        modules: vec![hero_module(), trust_module(), faq_module(), cta_module()],
        estimated_content_time: 45,
        supported_languages: vec!["en".to_string(), "de".to_string()],
    }
}

/// Full marketing-site template with features, pricing and news.
fn horizon_template() -> TemplateConfig {
    TemplateConfig {
        id: "horizon".to_string(),
        name: "Horizon".to_string(),
        thumbnail: "/templates/horizon/thumb.webp".to_string(),
        preview_url: "/templates/horizon/preview".to_string(),
        complexity: Complexity::Medium,
        features: vec![
            "multi-section".to_string(),
            "pricing-cards".to_string(),
            "news-feed".to_string(),
        ],
        modules: vec![
            hero_module(),
            trust_module(),
            features_module(),
            pricing_module(),
            news_module(),
            faq_module(),
            cta_module(),
        ],
        estimated_content_time: 150,
        supported_languages: vec!["en".to_string(), "de".to_string(), "fr".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_resolves_by_id() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("launchpad").is_some());
        assert!(registry.get("horizon").is_some());
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn mandatory_modules_are_marked() {
        let registry = TemplateRegistry::builtin();
        let horizon = registry.get("horizon").unwrap();
        let mandatory = horizon.mandatory_module_ids();
        assert!(mandatory.contains(&"hero"));
        assert!(mandatory.contains(&"cta"));
        assert!(!mandatory.contains(&"faq"));
    }

    #[test]
    fn module_ids_are_unique_within_each_template() {
        for template in TemplateRegistry::builtin().all() {
            let mut ids: Vec<_> = template.modules.iter().map(|m| &m.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), template.modules.len(), "{}", template.id);
        }
    }
}
