//! Variant generation: enumeration, narrowing, batch review and ranking.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use pageflow_compose::script::{Audience, Goal};
use pageflow_core::theme::{ThemeMode, ThemeRegistry};

use crate::engine::{DesignReviewEngine, DesignReviewResult, Recommendation};
use crate::submission::{DesignSubmission, DesignVariant, FeaturesVariant, HeroVariant};

/// Per-axis allow-lists; an unset axis allows every value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heroes: Option<Vec<HeroVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeaturesVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
}

/// Enumerate the constrained cartesian product hero × features × theme.
///
/// Each combination appears exactly once: the axes are fixed label sets and
/// theme ids are unique in the registry, so duplicates cannot occur.
pub fn generate_filtered_combinations(
    constraints: &VariantConstraints,
    themes: &ThemeRegistry,
) -> Vec<DesignVariant> {
    let heroes: Vec<HeroVariant> = match &constraints.heroes {
        Some(allowed) => HeroVariant::ALL
            .into_iter()
            .filter(|h| allowed.contains(h))
            .collect(),
        None => HeroVariant::ALL.to_vec(),
    };
    let features: Vec<FeaturesVariant> = match &constraints.features {
        Some(allowed) => FeaturesVariant::ALL
            .into_iter()
            .filter(|f| allowed.contains(f))
            .collect(),
        None => FeaturesVariant::ALL.to_vec(),
    };
    let theme_ids: Vec<&str> = themes
        .all()
        .iter()
        .filter(|t| constraints.mode.map_or(true, |mode| t.mode == mode))
        .filter(|t| {
            constraints
                .theme_ids
                .as_ref()
                .map_or(true, |ids| ids.iter().any(|id| id == &t.id))
        })
        .map(|t| t.id.as_str())
        .collect();

    let mut variants = Vec::with_capacity(heroes.len() * features.len() * theme_ids.len());
    for &hero in &heroes {
        for &feature in &features {
            for &theme_id in &theme_ids {
                variants.push(DesignVariant::new(hero, feature, theme_id));
            }
        }
    }
    variants
}

/// Narrow the combination space before batch review.
///
/// Fully deterministic: a stable sort over fixed pairing and theme priors,
/// truncated to `limit`. Repeated calls with the same inputs return the
/// same candidates in the same order.
pub fn smart_recommend(
    constraints: &VariantConstraints,
    themes: &ThemeRegistry,
    limit: usize,
) -> Vec<DesignVariant> {
    let mut scored: Vec<(i32, DesignVariant)> = generate_filtered_combinations(constraints, themes)
        .into_iter()
        .map(|variant| (variant_prior(&variant, themes), variant))
        .collect();

    scored.sort_by(|(pa, a), (pb, b)| {
        pb.cmp(pa)
            .then(a.complexity_weight().cmp(&b.complexity_weight()))
            .then_with(|| a.slug().cmp(&b.slug()))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, variant)| variant)
        .collect()
}

/// Declared prior used by [`smart_recommend`]; higher is more promising.
fn variant_prior(variant: &DesignVariant, themes: &ThemeRegistry) -> i32 {
    let pairing: i32 = match (variant.hero, variant.features) {
        (HeroVariant::Spotlight, FeaturesVariant::Grid) => 9,
        (HeroVariant::SplitScreen, FeaturesVariant::Alternating) => 9,
        (HeroVariant::Minimal, FeaturesVariant::Grid) => 8,
        (HeroVariant::Billboard, FeaturesVariant::Carousel) => 7,
        (HeroVariant::Spotlight, FeaturesVariant::Alternating) => 7,
        (HeroVariant::SplitScreen, FeaturesVariant::Grid) => 7,
        (HeroVariant::Minimal, FeaturesVariant::Tabs) => 6,
        (HeroVariant::Billboard, FeaturesVariant::Grid) => 6,
        _ => 4,
    };
    let theme_prior: i32 = themes
        .get(&variant.theme_id)
        .and_then(|t| t.effects.as_ref())
        .map_or(0, |effects| {
            i32::from(effects.glow) + i32::from(effects.gradient.is_some())
        });
    pairing + theme_prior
}

/// Per-variant outcome in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum VariantReviewOutcome {
    Reviewed(DesignReviewResult),
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReviewEntry {
    pub variant: DesignVariant,
    #[serde(flatten)]
    pub outcome: VariantReviewOutcome,
}

/// Batch output; entry order always matches input variant order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReviewResult {
    pub entries: Vec<BatchReviewEntry>,
    pub reviewed: usize,
    pub failed: usize,
}

/// Review each variant once, at most `concurrency` in flight.
///
/// A variant whose review fails is recorded with a failure marker and the
/// rest of the batch proceeds; output order matches input order regardless
/// of completion order.
pub async fn batch_review(
    engine: &DesignReviewEngine,
    variants: Vec<DesignVariant>,
    themes: &ThemeRegistry,
    audience: Audience,
    goal: Goal,
    concurrency: usize,
) -> BatchReviewResult {
    let entries: Vec<BatchReviewEntry> = stream::iter(variants.into_iter().map(|variant| {
        let engine = engine.clone();
        let theme = themes.get(&variant.theme_id).cloned();
        async move {
            let outcome = match theme {
                None => VariantReviewOutcome::Failed {
                    reason: format!("unknown theme '{}'", variant.theme_id),
                },
                Some(theme) => {
                    let submission =
                        DesignSubmission::new(variant.clone(), theme, audience, goal);
                    match engine.conduct_design_review(&submission).await {
                        Ok(result) => VariantReviewOutcome::Reviewed(result),
                        Err(err) => {
                            tracing::warn!(variant = %variant.slug(), error = %err, "variant review failed");
                            VariantReviewOutcome::Failed {
                                reason: err.to_string(),
                            }
                        }
                    }
                }
            };
            BatchReviewEntry { variant, outcome }
        }
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await;

    let reviewed = entries
        .iter()
        .filter(|e| matches!(e.outcome, VariantReviewOutcome::Reviewed(_)))
        .count();
    let failed = entries.len() - reviewed;

    BatchReviewResult {
        entries,
        reviewed,
        failed,
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedVariant {
    pub rank: usize,
    pub variant: DesignVariant,
    pub aggregate_score: u8,
    pub recommendation: Recommendation,
}

/// Rank reviewed variants: aggregate score descending, ties broken by lower
/// complexity weight, then by variant slug. Failed entries are excluded.
pub fn compare_variants(batch: &BatchReviewResult) -> Vec<RankedVariant> {
    let mut reviewed: Vec<(&DesignVariant, &DesignReviewResult)> = batch
        .entries
        .iter()
        .filter_map(|entry| match &entry.outcome {
            VariantReviewOutcome::Reviewed(result) => Some((&entry.variant, result)),
            VariantReviewOutcome::Failed { .. } => None,
        })
        .collect();

    reviewed.sort_by(|(va, ra), (vb, rb)| {
        rb.aggregate_score
            .cmp(&ra.aggregate_score)
            .then(va.complexity_weight().cmp(&vb.complexity_weight()))
            .then_with(|| va.slug().cmp(&vb.slug()))
    });

    reviewed
        .into_iter()
        .enumerate()
        .map(|(i, (variant, result))| RankedVariant {
            rank: i + 1,
            variant: variant.clone(),
            aggregate_score: result.aggregate_score,
            recommendation: result.recommendation,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::engine::{PartialPolicy, ReviewPolicy};
    use crate::rubric::{BuiltinRubrics, ReviewScore, ReviewerRole, RubricBackend, RubricError};

    #[test]
    fn unconstrained_space_is_the_full_product() {
        let themes = ThemeRegistry::builtin();
        let variants = generate_filtered_combinations(&VariantConstraints::default(), &themes);
        assert_eq!(variants.len(), 4 * 4 * themes.all().len());

        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn two_heroes_two_themes_yield_four_variants() {
        let themes = ThemeRegistry::builtin();
        let constraints = VariantConstraints {
            heroes: Some(vec![HeroVariant::Spotlight, HeroVariant::Minimal]),
            features: Some(vec![FeaturesVariant::Grid]),
            theme_ids: Some(vec!["dark-cyan".to_string(), "light-navy".to_string()]),
            mode: None,
        };
        let variants = generate_filtered_combinations(&constraints, &themes);
        assert_eq!(variants.len(), 4);
        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn mode_constraint_filters_themes() {
        let themes = ThemeRegistry::builtin();
        let constraints = VariantConstraints {
            mode: Some(ThemeMode::Dark),
            ..VariantConstraints::default()
        };
        let variants = generate_filtered_combinations(&constraints, &themes);
        assert!(!variants.is_empty());
        for variant in &variants {
            assert_eq!(
                themes.get(&variant.theme_id).unwrap().mode,
                ThemeMode::Dark
            );
        }
    }

    #[test]
    fn smart_recommend_is_deterministic_and_bounded() {
        let themes = ThemeRegistry::builtin();
        let constraints = VariantConstraints::default();
        let a = smart_recommend(&constraints, &themes, 6);
        let b = smart_recommend(&constraints, &themes, 6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);

        // The top pick must be one of the highest-prior pairings.
        let top = &a[0];
        assert!(matches!(
            (top.hero, top.features),
            (HeroVariant::Spotlight, FeaturesVariant::Grid)
                | (HeroVariant::SplitScreen, FeaturesVariant::Alternating)
        ));
    }

    #[tokio::test]
    async fn batch_preserves_order_and_isolates_failures() {
        // Fails every rubric for billboard submissions only.
        struct BillboardKiller;

        #[async_trait]
        impl RubricBackend for BillboardKiller {
            async fn score(
                &self,
                role: ReviewerRole,
                submission: &DesignSubmission,
            ) -> Result<ReviewScore, RubricError> {
                if submission.variant.hero == HeroVariant::Billboard {
                    return Err(RubricError::Backend("model refused".to_string()));
                }
                BuiltinRubrics.score(role, submission).await
            }
        }

        let themes = ThemeRegistry::builtin();
        let engine = DesignReviewEngine::new(
            Arc::new(BillboardKiller),
            ReviewPolicy {
                rubric_timeout: Duration::from_secs(1),
                on_partial: PartialPolicy::Downgrade,
            },
        );
        let variants = vec![
            DesignVariant::new(HeroVariant::Spotlight, FeaturesVariant::Grid, "dark-cyan"),
            DesignVariant::new(HeroVariant::Billboard, FeaturesVariant::Grid, "dark-cyan"),
            DesignVariant::new(HeroVariant::Minimal, FeaturesVariant::Grid, "light-navy"),
        ];

        let batch = batch_review(
            &engine,
            variants.clone(),
            &themes,
            Audience::Business,
            Goal::DirectSale,
            2,
        )
        .await;

        assert_eq!(batch.entries.len(), 3);
        assert_eq!(batch.reviewed, 2);
        assert_eq!(batch.failed, 1);
        // Input order survives concurrent completion.
        for (entry, variant) in batch.entries.iter().zip(&variants) {
            assert_eq!(&entry.variant, variant);
        }
        assert!(matches!(
            batch.entries[1].outcome,
            VariantReviewOutcome::Failed { .. }
        ));

        let ranking = compare_variants(&batch);
        assert_eq!(ranking.len(), 2);
        assert!(ranking
            .iter()
            .all(|r| r.variant.hero != HeroVariant::Billboard));
    }

    #[tokio::test]
    async fn unknown_theme_is_a_per_item_failure() {
        let themes = ThemeRegistry::builtin();
        let engine = DesignReviewEngine::builtin();
        let variants = vec![DesignVariant::new(
            HeroVariant::Spotlight,
            FeaturesVariant::Grid,
            "sepia",
        )];

        let batch = batch_review(
            &engine,
            variants,
            &themes,
            Audience::Consumer,
            Goal::Signup,
            4,
        )
        .await;
        assert_eq!(batch.failed, 1);
        assert!(matches!(
            &batch.entries[0].outcome,
            VariantReviewOutcome::Failed { reason } if reason.contains("sepia")
        ));
    }

    #[tokio::test]
    async fn ranking_is_sorted_and_tie_breaks_on_complexity() {
        let themes = ThemeRegistry::builtin();
        let engine = DesignReviewEngine::builtin();
        let variants = generate_filtered_combinations(
            &VariantConstraints {
                features: Some(vec![FeaturesVariant::Grid, FeaturesVariant::Alternating]),
                theme_ids: Some(vec!["light-navy".to_string()]),
                ..VariantConstraints::default()
            },
            &themes,
        );

        let batch = batch_review(
            &engine,
            variants,
            &themes,
            Audience::Business,
            Goal::LeadCapture,
            4,
        )
        .await;
        let ranking = compare_variants(&batch);

        assert_eq!(ranking.len(), 8);
        for pair in ranking.windows(2) {
            assert!(pair[0].aggregate_score >= pair[1].aggregate_score);
            if pair[0].aggregate_score == pair[1].aggregate_score {
                let wa = pair[0].variant.complexity_weight();
                let wb = pair[1].variant.complexity_weight();
                assert!(wa <= wb);
            }
        }
        assert_eq!(ranking[0].rank, 1);
    }
}
