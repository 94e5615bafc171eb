use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use pageflow_core::requirements::checklist::ProjectContentChecklist;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Checklist generation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/checklist", post(generate_checklist))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChecklistRequest {
    template_id: String,
    #[serde(default)]
    selected_modules: HashSet<String>,
}

/// Compute the content checklist for a template and module selection.
async fn generate_checklist(
    State(state): State<AppState>,
    Json(request): Json<ChecklistRequest>,
) -> ApiResult<Json<ProjectContentChecklist>> {
    let template = state
        .templates()
        .get(&request.template_id)
        .ok_or_else(|| ApiError::NotFound(format!("template '{}'", request.template_id)))?;

    let checklist = ProjectContentChecklist::generate(template, &request.selected_modules)?;
    Ok(Json(checklist))
}
