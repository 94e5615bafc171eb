//! Design review engine: rubric fan-out and rule-table aggregation.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rubric::{ReviewScore, ReviewerRole, RubricBackend, RubricError};
use crate::submission::{DesignSubmission, DesignVariant};

/// Any single score below this floor vetoes the submission outright.
pub const VETO_FLOOR: u8 = 40;
/// All scores at or above this mark make a strong recommendation.
pub const UNANIMOUS_HIGH: u8 = 85;
/// Mean score needed for a plain recommendation.
pub const RECOMMEND_MEAN: f64 = 70.0;

/// What to do when only two of three rubrics return in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartialPolicy {
    /// Keep the partial result but force `NeedsHumanReview`.
    Downgrade,
    /// Fail the whole submission.
    Fail,
}

/// Explicit engine configuration, threaded into every call site.
#[derive(Debug, Clone, Copy)]
pub struct ReviewPolicy {
    pub rubric_timeout: Duration,
    pub on_partial: PartialPolicy,
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self {
            rubric_timeout: Duration::from_secs(8),
            on_partial: PartialPolicy::Downgrade,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    StronglyRecommend,
    Recommend,
    NeedsRevision,
    NeedsHumanReview,
    Reject,
}

/// Aggregated outcome of one design review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReviewResult {
    pub submission_id: uuid::Uuid,
    pub variant: DesignVariant,
    pub scores: Vec<ReviewScore>,
    pub aggregate_score: u8,
    pub recommendation: Recommendation,
    /// True when a rubric failed and the partial policy downgraded the
    /// recommendation.
    pub degraded: bool,
}

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("too few rubrics returned ({returned} of 3)")]
    RubricFailure { returned: usize },
}

/// Runs submissions through the three rubrics and aggregates the scores.
#[derive(Clone)]
pub struct DesignReviewEngine {
    backend: Arc<dyn RubricBackend>,
    policy: ReviewPolicy,
}

impl DesignReviewEngine {
    pub fn new(backend: Arc<dyn RubricBackend>, policy: ReviewPolicy) -> Self {
        Self { backend, policy }
    }

    /// Engine with the deterministic built-in rubrics and default policy.
    pub fn builtin() -> Self {
        Self::new(Arc::new(crate::rubric::BuiltinRubrics), ReviewPolicy::default())
    }

    pub fn policy(&self) -> ReviewPolicy {
        self.policy
    }

    /// Score one submission with all three rubrics concurrently.
    ///
    /// A rubric that errors or exceeds the configured deadline fails alone;
    /// the partial policy decides whether 2-of-3 still yields a result.
    pub async fn conduct_design_review(
        &self,
        submission: &DesignSubmission,
    ) -> Result<DesignReviewResult, ReviewError> {
        let (technical, aesthetic, business) = tokio::join!(
            self.scored(ReviewerRole::Technical, submission),
            self.scored(ReviewerRole::Aesthetic, submission),
            self.scored(ReviewerRole::Business, submission),
        );

        let mut scores = Vec::with_capacity(3);
        for outcome in [technical, aesthetic, business] {
            match outcome {
                Ok(score) => scores.push(score),
                Err((role, err)) => {
                    tracing::warn!(?role, error = %err, "rubric call failed");
                }
            }
        }

        let degraded = scores.len() < 3;
        if scores.len() < 2 || (degraded && self.policy.on_partial == PartialPolicy::Fail) {
            return Err(ReviewError::RubricFailure {
                returned: scores.len(),
            });
        }

        let aggregate_score = mean_score(&scores);
        let recommendation = if degraded {
            Recommendation::NeedsHumanReview
        } else {
            recommendation_for(&scores)
        };

        Ok(DesignReviewResult {
            submission_id: submission.id,
            variant: submission.variant.clone(),
            scores,
            aggregate_score,
            recommendation,
            degraded,
        })
    }

    async fn scored(
        &self,
        role: ReviewerRole,
        submission: &DesignSubmission,
    ) -> Result<ReviewScore, (ReviewerRole, RubricError)> {
        let deadline = self.policy.rubric_timeout;
        match tokio::time::timeout(deadline, self.backend.score(role, submission)).await {
            Ok(Ok(score)) => Ok(score),
            Ok(Err(err)) => Err((role, err)),
            Err(_) => Err((role, RubricError::Timeout(deadline.as_millis() as u64))),
        }
    }
}

/// Review a submission with the built-in engine.
pub async fn conduct_design_review(
    submission: &DesignSubmission,
) -> Result<DesignReviewResult, ReviewError> {
    DesignReviewEngine::builtin()
        .conduct_design_review(submission)
        .await
}

fn mean_score(scores: &[ReviewScore]) -> u8 {
    let sum: u32 = scores.iter().map(|s| u32::from(s.score)).sum();
    ((sum as f64 / scores.len() as f64).round()) as u8
}

/// The fixed aggregation rule table.
///
/// Veto first: any score under [`VETO_FLOOR`] rejects regardless of the
/// others. Then unanimous high, then the mean band.
pub fn recommendation_for(scores: &[ReviewScore]) -> Recommendation {
    if scores.iter().any(|s| s.score < VETO_FLOOR) {
        return Recommendation::Reject;
    }
    if scores.iter().all(|s| s.score >= UNANIMOUS_HIGH) {
        return Recommendation::StronglyRecommend;
    }
    let mean = scores.iter().map(|s| f64::from(s.score)).sum::<f64>() / scores.len() as f64;
    if mean >= RECOMMEND_MEAN {
        Recommendation::Recommend
    } else {
        Recommendation::NeedsRevision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pageflow_compose::script::{Audience, Goal};
    use pageflow_core::theme::ThemeRegistry;

    use crate::submission::{FeaturesVariant, HeroVariant};

    fn score(role: ReviewerRole, value: u8) -> ReviewScore {
        ReviewScore {
            role,
            score: value,
            rationale: String::new(),
            concerns: vec![],
        }
    }

    fn scores(t: u8, a: u8, b: u8) -> Vec<ReviewScore> {
        vec![
            score(ReviewerRole::Technical, t),
            score(ReviewerRole::Aesthetic, a),
            score(ReviewerRole::Business, b),
        ]
    }

    fn submission() -> DesignSubmission {
        let theme = ThemeRegistry::builtin().get("light-navy").unwrap().clone();
        DesignSubmission::new(
            DesignVariant::new(HeroVariant::Spotlight, FeaturesVariant::Grid, "light-navy"),
            theme,
            Audience::Consumer,
            Goal::Signup,
        )
    }

    #[test]
    fn veto_beats_high_scores() {
        assert_eq!(
            recommendation_for(&scores(39, 95, 95)),
            Recommendation::Reject
        );
    }

    #[test]
    fn unanimous_high_is_a_strong_recommend() {
        assert_eq!(
            recommendation_for(&scores(85, 90, 99)),
            Recommendation::StronglyRecommend
        );
    }

    #[test]
    fn mean_band_splits_recommend_and_revision() {
        assert_eq!(
            recommendation_for(&scores(60, 75, 80)),
            Recommendation::Recommend
        );
        assert_eq!(
            recommendation_for(&scores(55, 60, 70)),
            Recommendation::NeedsRevision
        );
    }

    #[tokio::test]
    async fn review_is_deterministic() {
        let engine = DesignReviewEngine::builtin();
        let submission = submission();
        let a = engine.conduct_design_review(&submission).await.unwrap();
        let b = engine.conduct_design_review(&submission).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.scores.len(), 3);
        assert!(!a.degraded);
    }

    /// Backend that fails a chosen set of roles.
    struct FlakyBackend {
        failing: Vec<ReviewerRole>,
    }

    #[async_trait]
    impl RubricBackend for FlakyBackend {
        async fn score(
            &self,
            role: ReviewerRole,
            submission: &DesignSubmission,
        ) -> Result<ReviewScore, RubricError> {
            if self.failing.contains(&role) {
                return Err(RubricError::Backend("scoring model unavailable".to_string()));
            }
            crate::rubric::BuiltinRubrics.score(role, submission).await
        }
    }

    #[tokio::test]
    async fn two_of_three_downgrades_to_human_review() {
        let engine = DesignReviewEngine::new(
            Arc::new(FlakyBackend {
                failing: vec![ReviewerRole::Aesthetic],
            }),
            ReviewPolicy::default(),
        );
        let result = engine.conduct_design_review(&submission()).await.unwrap();
        assert!(result.degraded);
        assert_eq!(result.scores.len(), 2);
        assert_eq!(result.recommendation, Recommendation::NeedsHumanReview);
    }

    #[tokio::test]
    async fn partial_fail_policy_fails_the_submission() {
        let engine = DesignReviewEngine::new(
            Arc::new(FlakyBackend {
                failing: vec![ReviewerRole::Aesthetic],
            }),
            ReviewPolicy {
                on_partial: PartialPolicy::Fail,
                ..ReviewPolicy::default()
            },
        );
        assert!(matches!(
            engine.conduct_design_review(&submission()).await,
            Err(ReviewError::RubricFailure { returned: 2 })
        ));
    }

    #[tokio::test]
    async fn one_of_three_always_fails() {
        let engine = DesignReviewEngine::new(
            Arc::new(FlakyBackend {
                failing: vec![ReviewerRole::Technical, ReviewerRole::Business],
            }),
            ReviewPolicy::default(),
        );
        assert!(matches!(
            engine.conduct_design_review(&submission()).await,
            Err(ReviewError::RubricFailure { returned: 1 })
        ));
    }

    #[tokio::test]
    async fn slow_rubric_times_out_alone() {
        struct SlowBackend;

        #[async_trait]
        impl RubricBackend for SlowBackend {
            async fn score(
                &self,
                role: ReviewerRole,
                submission: &DesignSubmission,
            ) -> Result<ReviewScore, RubricError> {
                if role == ReviewerRole::Business {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                }
                crate::rubric::BuiltinRubrics.score(role, submission).await
            }
        }

        let engine = DesignReviewEngine::new(
            Arc::new(SlowBackend),
            ReviewPolicy {
                rubric_timeout: Duration::from_millis(20),
                on_partial: PartialPolicy::Downgrade,
            },
        );
        let result = engine.conduct_design_review(&submission()).await.unwrap();
        assert!(result.degraded);
        assert!(result
            .scores
            .iter()
            .all(|s| s.role != ReviewerRole::Business));
    }
}
