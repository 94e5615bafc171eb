//! Design review: rubric scoring of design variants and batch comparison.
//!
//! Three independent reviewer personas score a submission; an explicit rule
//! table turns their scores into a recommendation. The variant generator
//! enumerates the design space, narrows it with a deterministic prior and
//! runs batches through the engine with bounded concurrency.

pub mod engine;
pub mod rubric;
pub mod submission;
pub mod variants;

pub use engine::{
    conduct_design_review, DesignReviewEngine, DesignReviewResult, PartialPolicy, Recommendation,
    ReviewError, ReviewPolicy,
};
pub use rubric::{BuiltinRubrics, ReviewScore, ReviewerRole, RubricBackend, RubricError};
pub use submission::{DesignSubmission, DesignVariant, FeaturesVariant, HeroVariant};
pub use variants::{
    batch_review, compare_variants, generate_filtered_combinations, smart_recommend,
    BatchReviewResult, RankedVariant, VariantConstraints, VariantReviewOutcome,
};
