use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use pageflow_compose::composer::{compose, ComposeMode, RenderTree};
use pageflow_compose::sample::sample_page_content;
use pageflow_compose::script::{generate_script, Audience, Goal};
use pageflow_core::content::page::PageContent;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Page composition routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/compose", post(compose_page))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComposeRequest {
    audience: Audience,
    goal: Goal,
    theme_id: String,
    #[serde(default = "default_mode")]
    mode: ComposeMode,
    /// Concrete page content; the sample fixture when omitted.
    #[serde(default)]
    content: Option<PageContent>,
}

fn default_mode() -> ComposeMode {
    ComposeMode::Strict
}

/// Generate a script for the audience/goal and compose it with content and
/// theme into a render tree.
async fn compose_page(
    State(state): State<AppState>,
    Json(request): Json<ComposeRequest>,
) -> ApiResult<Json<RenderTree>> {
    let theme = state
        .themes()
        .get(&request.theme_id)
        .ok_or_else(|| ApiError::NotFound(format!("theme '{}'", request.theme_id)))?;

    let script = generate_script(request.audience, request.goal);
    let content = request.content.unwrap_or_else(sample_page_content);

    let tree = compose(&script, &content, theme, request.mode)?;
    Ok(Json(tree))
}
