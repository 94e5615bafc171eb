//! Reviewer rubrics.
//!
//! Three stateless scoring personas, each with its own fixed weight table.
//! `BuiltinRubrics` is the deterministic local backend; a remote model can
//! stand in behind the same [`RubricBackend`] trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pageflow_compose::script::{Audience, Goal};
use pageflow_core::theme::{AnimationLevel, ShadowIntensity, ThemeMode};

use crate::submission::{DesignSubmission, FeaturesVariant, HeroVariant};

/// The three reviewer personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewerRole {
    Technical,
    Aesthetic,
    Business,
}

impl ReviewerRole {
    pub const ALL: [ReviewerRole; 3] = [
        ReviewerRole::Technical,
        ReviewerRole::Aesthetic,
        ReviewerRole::Business,
    ];
}

/// One persona's verdict on a submission. Scores are 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewScore {
    pub role: ReviewerRole,
    pub score: u8,
    pub rationale: String,
    pub concerns: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RubricError {
    #[error("rubric call timed out after {0}ms")]
    Timeout(u64),
    #[error("rubric backend failure: {0}")]
    Backend(String),
}

/// The seam a remote scoring model plugs into.
#[async_trait]
pub trait RubricBackend: Send + Sync {
    async fn score(
        &self,
        role: ReviewerRole,
        submission: &DesignSubmission,
    ) -> Result<ReviewScore, RubricError>;
}

/// Deterministic local rubric implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRubrics;

#[async_trait]
impl RubricBackend for BuiltinRubrics {
    async fn score(
        &self,
        role: ReviewerRole,
        submission: &DesignSubmission,
    ) -> Result<ReviewScore, RubricError> {
        Ok(match role {
            ReviewerRole::Technical => score_technical(submission),
            ReviewerRole::Aesthetic => score_aesthetic(submission),
            ReviewerRole::Business => score_business(submission),
        })
    }
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Conservative reviewer: starts high, deducts for anything that costs
/// payload, motion or maintenance.
pub fn score_technical(submission: &DesignSubmission) -> ReviewScore {
    let mut score: i32 = 90;
    let mut concerns = Vec::new();

    score -= 4 * i32::from(submission.variant.hero.complexity_weight());
    score -= 3 * i32::from(submission.variant.features.complexity_weight());
    if submission.variant.hero == HeroVariant::Billboard {
        concerns.push("billboard hero ships a large above-the-fold payload".to_string());
    }
    if submission.variant.features == FeaturesVariant::Carousel {
        concerns.push("carousel needs scripting and touch handling".to_string());
    }

    match submission.theme.style.animation_level {
        AnimationLevel::Rich => {
            score -= 15;
            concerns.push("rich animation level hurts low-end devices".to_string());
        }
        AnimationLevel::Subtle => score -= 5,
        AnimationLevel::None => {}
    }
    if submission.theme.style.shadow_intensity == ShadowIntensity::Pronounced {
        score -= 8;
        concerns.push("pronounced shadows repaint badly on scroll".to_string());
    }
    if let Some(effects) = &submission.theme.effects {
        if effects.glow {
            score -= 7;
            concerns.push("glow effects composite poorly".to_string());
        }
        if effects.gradient.is_some() {
            score -= 3;
        }
    }

    ReviewScore {
        role: ReviewerRole::Technical,
        score: clamp_score(score),
        rationale: format!(
            "Weighed implementation cost of {} at animation level {:?}",
            submission.variant.slug(),
            submission.theme.style.animation_level
        ),
        concerns,
    }
}

/// Aesthetic reviewer: rewards coherent pairings of mode, effects and
/// section variants.
pub fn score_aesthetic(submission: &DesignSubmission) -> ReviewScore {
    let mut score: i32 = 70;
    let mut concerns = Vec::new();
    let variant = &submission.variant;
    let theme = &submission.theme;

    // Pairing harmony between hero and features layouts.
    score += match (variant.hero, variant.features) {
        (HeroVariant::Spotlight, FeaturesVariant::Grid) => 6,
        (HeroVariant::SplitScreen, FeaturesVariant::Alternating) => 6,
        (HeroVariant::Minimal, FeaturesVariant::Grid) => 5,
        (HeroVariant::Billboard, FeaturesVariant::Carousel) => 4,
        (HeroVariant::Minimal, FeaturesVariant::Carousel) => {
            concerns.push("minimal hero clashes with a carousel below it".to_string());
            -6
        }
        _ => 0,
    };

    match theme.mode {
        ThemeMode::Dark => {
            if let Some(effects) = &theme.effects {
                if effects.glow {
                    score += 8;
                }
                if effects.gradient.is_some() {
                    score += 5;
                }
            }
            if theme.style.animation_level == AnimationLevel::Rich {
                score += 4;
            }
        }
        ThemeMode::Light => {
            if theme.style.shadow_intensity == ShadowIntensity::None {
                score += 4;
            }
            if theme.style.animation_level == AnimationLevel::Rich {
                score -= 4;
                concerns.push("rich motion reads as noisy on light surfaces".to_string());
            }
        }
    }

    if theme.style.animation_level == AnimationLevel::Subtle {
        score += 4;
    }

    ReviewScore {
        role: ReviewerRole::Aesthetic,
        score: clamp_score(score),
        rationale: format!(
            "Judged visual coherence of {} on the {} theme",
            variant.slug(),
            theme.id
        ),
        concerns,
    }
}

/// Business reviewer: scores goal and audience fit of the layout choices.
pub fn score_business(submission: &DesignSubmission) -> ReviewScore {
    let mut concerns = Vec::new();
    let variant = &submission.variant;

    let hero_fit: i32 = match (submission.goal, variant.hero) {
        (Goal::DirectSale, HeroVariant::Billboard) => 18,
        (Goal::DirectSale, HeroVariant::Spotlight) => 12,
        (Goal::DirectSale, _) => 6,
        (Goal::LeadCapture, HeroVariant::SplitScreen) => 18,
        (Goal::LeadCapture, HeroVariant::Spotlight) => 12,
        (Goal::LeadCapture, _) => 7,
        (Goal::Signup, HeroVariant::Spotlight) => 18,
        (Goal::Signup, HeroVariant::Minimal) => 14,
        (Goal::Signup, _) => 8,
        (Goal::Awareness, HeroVariant::Minimal) => 16,
        (Goal::Awareness, HeroVariant::SplitScreen) => 12,
        (Goal::Awareness, _) => 8,
    };

    let features_fit: i32 = match (submission.audience, variant.features) {
        (Audience::Business, FeaturesVariant::Alternating) => 14,
        (Audience::Business, FeaturesVariant::Grid) => 11,
        (Audience::Developer, FeaturesVariant::Grid) => 14,
        (Audience::Developer, FeaturesVariant::Tabs) => 12,
        (Audience::Consumer, FeaturesVariant::Carousel) => 13,
        (Audience::Consumer, FeaturesVariant::Grid) => 11,
        _ => 6,
    };

    if hero_fit < 10 {
        concerns.push(format!(
            "{} hero is a weak opener for a {:?} goal",
            variant.hero.label(),
            submission.goal
        ));
    }
    if features_fit < 10 {
        concerns.push(format!(
            "{} features layout undersells to a {:?} audience",
            variant.features.label(),
            submission.audience
        ));
    }

    let score = clamp_score(55 + hero_fit + features_fit);

    ReviewScore {
        role: ReviewerRole::Business,
        score,
        rationale: format!(
            "Assessed conversion fit of {} for {:?}/{:?}",
            variant.slug(),
            submission.audience,
            submission.goal
        ),
        concerns,
    }
}
