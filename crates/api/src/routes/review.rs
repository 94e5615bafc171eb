use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use pageflow_compose::script::{Audience, Goal};
use pageflow_review::engine::DesignReviewResult;
use pageflow_review::submission::{DesignSubmission, DesignVariant, FeaturesVariant, HeroVariant};
use pageflow_review::variants::{
    batch_review, compare_variants, generate_filtered_combinations, smart_recommend,
    VariantConstraints,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Design review routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/review", post(review_single))
        .route("/v1/review/batch", post(review_batch))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRequest {
    hero: HeroVariant,
    features: FeaturesVariant,
    theme_id: String,
    audience: Audience,
    goal: Goal,
}

/// Score one design variant with all three rubrics.
async fn review_single(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<Json<DesignReviewResult>> {
    let theme = state
        .themes()
        .get(&request.theme_id)
        .ok_or_else(|| ApiError::NotFound(format!("theme '{}'", request.theme_id)))?
        .clone();

    let submission = DesignSubmission::new(
        DesignVariant::new(request.hero, request.features, &request.theme_id),
        theme,
        request.audience,
        request.goal,
    );
    let result = state.engine().conduct_design_review(&submission).await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchReviewRequest {
    #[serde(default)]
    constraints: VariantConstraints,
    audience: Audience,
    goal: Goal,
    /// When set, narrow the space with the smart prior before reviewing.
    #[serde(default)]
    limit: Option<usize>,
}

/// Enumerate variants, review them and return the ranked comparison.
async fn review_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchReviewRequest>,
) -> ApiResult<Json<Value>> {
    let variants = match request.limit {
        Some(limit) => smart_recommend(&request.constraints, state.themes(), limit),
        None => generate_filtered_combinations(&request.constraints, state.themes()),
    };
    if variants.is_empty() {
        return Err(ApiError::BadRequest(
            "constraints leave no variants to review".to_string(),
        ));
    }

    let batch = batch_review(
        state.engine(),
        variants,
        state.themes(),
        request.audience,
        request.goal,
        state.config().batch_concurrency,
    )
    .await;
    let ranking = compare_variants(&batch);

    Ok(Json(json!({
        "batch": batch,
        "ranking": ranking,
    })))
}
