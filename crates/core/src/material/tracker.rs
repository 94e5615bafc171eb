//! Material tracking: diffs a submission set against a checklist.
//!
//! Pure function over in-memory values; persisting submissions is the
//! storage collaborator's job.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::submission::{MaterialValue, Submission, SubmissionState};
use crate::content::field::FieldType;
use crate::requirements::checklist::ProjectContentChecklist;
use crate::requirements::key::RequirementKey;

/// One checklist requirement joined with its submission state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialItem {
    pub key: RequirementKey,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub state: SubmissionState,
    /// True when a rejection happened at any point, including after a
    /// newer value superseded it.
    pub previously_rejected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<MaterialValue>,
}

impl MaterialItem {
    /// Outstanding items still block completion and appear in reminders.
    pub fn is_outstanding(&self) -> bool {
        self.required
            && matches!(
                self.state,
                SubmissionState::Missing | SubmissionState::Rejected
            )
    }
}

/// Completion snapshot for a project's material set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMaterialStatus {
    pub template_id: String,
    pub items: Vec<MaterialItem>,
    /// Fraction of required items that are submitted or approved, in [0, 1].
    pub completion_ratio: f64,
    pub required_total: usize,
    pub required_done: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_submission_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_submission: Option<i64>,
    pub generated_at: DateTime<Utc>,
}

impl ProjectMaterialStatus {
    pub fn outstanding(&self) -> impl Iterator<Item = &MaterialItem> {
        self.items.iter().filter(|i| i.is_outstanding())
    }

    pub fn is_complete(&self) -> bool {
        self.completion_ratio >= 1.0
    }
}

/// Classify every checklist requirement against the submission set.
///
/// Submissions whose keys are not in the checklist — including instances
/// beyond a repeatable section's bounds — are ignored: the checklist is the
/// source of truth for what counts.
pub fn compute_status(
    checklist: &ProjectContentChecklist,
    submissions: &HashMap<RequirementKey, Submission>,
    now: DateTime<Utc>,
) -> ProjectMaterialStatus {
    let mut items = Vec::with_capacity(checklist.requirements.len());
    let mut last_submission_at: Option<DateTime<Utc>> = None;

    for requirement in &checklist.requirements {
        let submission = submissions.get(&requirement.key);

        let (state, previously_rejected, value) = match submission {
            None => (SubmissionState::Missing, false, None),
            Some(s) => {
                last_submission_at = Some(match last_submission_at {
                    Some(prev) => prev.max(s.submitted_at),
                    None => s.submitted_at,
                });
                (s.state(), s.previously_rejected(), Some(s.value.clone()))
            }
        };

        items.push(MaterialItem {
            key: requirement.key.clone(),
            label: requirement.label.clone(),
            field_type: requirement.field_type,
            required: requirement.required,
            state,
            previously_rejected,
            value,
        });
    }

    let required_total = items.iter().filter(|i| i.required).count();
    let required_done = items
        .iter()
        .filter(|i| {
            i.required
                && matches!(
                    i.state,
                    SubmissionState::Submitted | SubmissionState::Approved
                )
        })
        .count();
    let completion_ratio = if required_total == 0 {
        1.0
    } else {
        required_done as f64 / required_total as f64
    };

    ProjectMaterialStatus {
        template_id: checklist.template_id.clone(),
        items,
        completion_ratio,
        required_total,
        required_done,
        last_submission_at,
        days_since_last_submission: last_submission_at.map(|t| (now - t).num_days()),
        generated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    use crate::content::field::ContentField;
    use crate::content::section::ContentSection;
    use crate::template::config::{Complexity, TemplateConfig, TemplateModule};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    /// Hero module requiring headline + image, FAQ module with an optional
    /// subtitle — the checklist shape used across tracker tests.
    fn fixture_template() -> TemplateConfig {
        TemplateConfig {
            id: "fixture".to_string(),
            name: "Fixture".to_string(),
            thumbnail: String::new(),
            preview_url: String::new(),
            complexity: Complexity::Simple,
            features: vec![],
            modules: vec![
                TemplateModule::new("hero", "Hero", "", false).with_section(ContentSection::new(
                    "hero",
                    "Hero",
                    "",
                    vec![
                        ContentField::new("headline", "Headline", FieldType::Text, true),
                        ContentField::new("image", "Hero image", FieldType::Image, true),
                    ],
                )),
                TemplateModule::new("faq", "FAQ", "", false).with_section(ContentSection::new(
                    "faq",
                    "FAQ",
                    "",
                    vec![ContentField::new(
                        "subtitle",
                        "Subtitle",
                        FieldType::Text,
                        false,
                    )],
                )),
            ],
            estimated_content_time: 10,
            supported_languages: vec![],
        }
    }

    fn fixture_checklist() -> ProjectContentChecklist {
        ProjectContentChecklist::generate(&fixture_template(), &HashSet::new()).unwrap()
    }

    #[test]
    fn half_submitted_scenario() {
        let checklist = fixture_checklist();
        let mut submissions = HashMap::new();
        submissions.insert(
            RequirementKey::new("hero", "headline"),
            Submission::new(MaterialValue::text("Launch faster"), at(1, 9)),
        );

        let status = compute_status(&checklist, &submissions, at(1, 12));

        assert_eq!(status.required_total, 2);
        assert_eq!(status.required_done, 1);
        assert!((status.completion_ratio - 0.5).abs() < f64::EPSILON);

        let missing: Vec<String> = status.outstanding().map(|i| i.key.to_string()).collect();
        assert_eq!(missing, vec!["hero.image"]);
    }

    #[test]
    fn optional_items_never_block_completion() {
        let checklist = fixture_checklist();
        let mut submissions = HashMap::new();
        submissions.insert(
            RequirementKey::new("hero", "headline"),
            Submission::new(MaterialValue::text("Launch faster"), at(1, 9)),
        );
        submissions.insert(
            RequirementKey::new("hero", "image"),
            Submission::new(MaterialValue::file("preview://assets/hero.webp"), at(1, 10)),
        );
        // faq.subtitle stays missing — it is optional.

        let status = compute_status(&checklist, &submissions, at(2, 9));
        assert!(status.is_complete());
        assert_eq!(status.completion_ratio, 1.0);
    }

    #[test]
    fn ratio_stays_in_unit_interval_and_empty_checklist_is_complete() {
        let template = TemplateConfig {
            modules: vec![],
            ..fixture_template()
        };
        let checklist = ProjectContentChecklist::generate(&template, &HashSet::new()).unwrap();
        let status = compute_status(&checklist, &HashMap::new(), at(1, 9));
        assert_eq!(status.completion_ratio, 1.0);
        assert_eq!(status.required_total, 0);
    }

    #[test]
    fn rejected_counts_as_outstanding_but_not_missing() {
        let checklist = fixture_checklist();
        let mut submissions = HashMap::new();
        let mut rejected = Submission::new(MaterialValue::file("preview://assets/low.jpg"), at(1, 9));
        rejected.decide(false, Some("resolution too low".to_string()), at(1, 10));
        submissions.insert(RequirementKey::new("hero", "image"), rejected);

        let status = compute_status(&checklist, &submissions, at(3, 9));
        let image = status
            .items
            .iter()
            .find(|i| i.key == RequirementKey::new("hero", "image"))
            .unwrap();
        assert_eq!(image.state, SubmissionState::Rejected);
        assert!(image.is_outstanding());
        // Rejected required items keep the ratio below 1.
        assert!(status.completion_ratio < 1.0);
    }

    #[test]
    fn unknown_submission_keys_are_ignored() {
        let checklist = fixture_checklist();
        let mut submissions = HashMap::new();
        submissions.insert(
            RequirementKey::instanced("news", "title", 99),
            Submission::new(MaterialValue::text("stray"), at(1, 9)),
        );

        let status = compute_status(&checklist, &submissions, at(1, 12));
        assert_eq!(status.items.len(), checklist.len());
        assert!(status.items.iter().all(|i| i.key.section_id() != "news"));
        // A stray submission also does not move the submission clock.
        assert!(status.last_submission_at.is_none());
    }

    #[test]
    fn days_since_last_submission() {
        let checklist = fixture_checklist();
        let mut submissions = HashMap::new();
        submissions.insert(
            RequirementKey::new("hero", "headline"),
            Submission::new(MaterialValue::text("Launch faster"), at(1, 9)),
        );

        let status = compute_status(&checklist, &submissions, at(8, 9));
        assert_eq!(status.days_since_last_submission, Some(7));
    }
}
