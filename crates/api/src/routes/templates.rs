use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Template catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/templates", get(list_templates))
        .route("/v1/templates/{id}", get(get_template))
}

/// Catalog summaries without module internals.
async fn list_templates(State(state): State<AppState>) -> Json<Value> {
    let templates: Vec<Value> = state
        .templates()
        .all()
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "name": t.name,
                "thumbnail": t.thumbnail,
                "previewUrl": t.preview_url,
                "complexity": t.complexity,
                "features": t.features,
                "estimatedContentTime": t.estimated_content_time,
                "moduleCount": t.modules.len(),
            })
        })
        .collect();
    Json(json!({ "templates": templates }))
}

/// Full template configuration including modules, sections and fields.
async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let template = state
        .templates()
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("template '{id}'")))?;
    Ok(Json(serde_json::to_value(template).map_err(|e| {
        ApiError::Internal(format!("serialize template: {e}"))
    })?))
}
