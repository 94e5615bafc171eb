use std::collections::HashSet;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use pageflow_core::content::field::ContentField;
use pageflow_core::content::validate::validate_field_value;
use pageflow_core::events::types::{
    ChecklistRegeneratedEvent, MaterialReviewedEvent, MaterialSubmittedEvent, PipelineEvent,
};
use pageflow_core::material::submission::{MaterialValue, Submission};
use pageflow_core::material::tracker::{compute_status, ProjectMaterialStatus};
use pageflow_core::reminder::{generate_reminder, ReminderTrigger};
use pageflow_core::requirements::checklist::{ContentRequirement, ProjectContentChecklist};
use pageflow_core::requirements::key::RequirementKey;
use pageflow_core::storage::StoredObject;

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, ProjectRecord};

/// Project and material tracking routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/projects", post(create_project))
        .route("/v1/projects/{id}/status", get(project_status))
        .route("/v1/projects/{id}/materials", post(submit_material))
        .route("/v1/projects/{id}/materials/decision", post(decide_material))
        .route("/v1/projects/{id}/reminder", get(project_reminder))
        .route("/v1/projects/{id}/uploads", post(upload_material))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectRequest {
    template_id: String,
    #[serde(default)]
    selected_modules: HashSet<String>,
}

/// Register a project and derive its initial checklist.
async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<Json<Value>> {
    let template = state
        .templates()
        .get(&request.template_id)
        .ok_or_else(|| ApiError::NotFound(format!("template '{}'", request.template_id)))?;
    let checklist = ProjectContentChecklist::generate(template, &request.selected_modules)?;

    let project_id = Uuid::new_v4();
    state.projects().write().await.insert(
        project_id,
        ProjectRecord {
            template_id: request.template_id.clone(),
            selected_modules: request.selected_modules,
            submissions: Default::default(),
        },
    );

    let _ = state
        .event_bus()
        .publish(PipelineEvent::ChecklistRegenerated(ChecklistRegeneratedEvent {
            project_id,
            template_id: request.template_id,
            requirement_count: checklist.len(),
            timestamp: Utc::now(),
        }));

    Ok(Json(json!({
        "projectId": project_id,
        "requirementCount": checklist.len(),
    })))
}

/// Rebuild the checklist for a stored project record.
async fn project_checklist(
    state: &AppState,
    project: &ProjectRecord,
) -> ApiResult<ProjectContentChecklist> {
    let template = state
        .templates()
        .get(&project.template_id)
        .ok_or_else(|| ApiError::Internal(format!("template '{}' vanished", project.template_id)))?;
    Ok(ProjectContentChecklist::generate(
        template,
        &project.selected_modules,
    )?)
}

async fn load_status(state: &AppState, project_id: Uuid) -> ApiResult<ProjectMaterialStatus> {
    let projects = state.projects().read().await;
    let project = projects
        .get(&project_id)
        .ok_or_else(|| ApiError::NotFound(format!("project '{project_id}'")))?;
    let checklist = project_checklist(state, project).await?;
    Ok(compute_status(&checklist, &project.submissions, Utc::now()))
}

/// Completion snapshot for a project.
async fn project_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProjectMaterialStatus>> {
    Ok(Json(load_status(&state, id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitMaterialRequest {
    key: String,
    value: MaterialValue,
}

/// Submit (or resubmit) a material value for one requirement.
async fn submit_material(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitMaterialRequest>,
) -> ApiResult<Json<ProjectMaterialStatus>> {
    let key = RequirementKey::parse(&request.key)?;
    let now = Utc::now();

    let resubmission = {
        let mut projects = state.projects().write().await;
        let project = projects
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("project '{id}'")))?;

        let checklist = project_checklist(&state, project).await?;
        let requirement = checklist
            .requirements
            .iter()
            .find(|r| r.key == key)
            .ok_or_else(|| {
                ApiError::BadRequest(format!("'{key}' is not part of this project's checklist"))
            })?;
        validate_field_value(&field_from_requirement(requirement), &request.value)?;

        match project.submissions.get_mut(&key) {
            Some(existing) => {
                existing.resubmit(request.value, now);
                true
            }
            None => {
                project
                    .submissions
                    .insert(key.clone(), Submission::new(request.value, now));
                false
            }
        }
    };

    let _ = state
        .event_bus()
        .publish(PipelineEvent::MaterialSubmitted(MaterialSubmittedEvent {
            project_id: id,
            requirement_key: key.to_string(),
            resubmission,
            timestamp: now,
        }));

    Ok(Json(load_status(&state, id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecisionRequest {
    key: String,
    approved: bool,
    #[serde(default)]
    note: Option<String>,
}

/// Record a reviewer decision on a submitted item.
async fn decide_material(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DecisionRequest>,
) -> ApiResult<Json<ProjectMaterialStatus>> {
    let key = RequirementKey::parse(&request.key)?;
    let now = Utc::now();

    {
        let mut projects = state.projects().write().await;
        let project = projects
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("project '{id}'")))?;
        let submission = project.submissions.get_mut(&key).ok_or_else(|| {
            ApiError::NotFound(format!("no submission for '{key}' to review"))
        })?;
        submission.decide(request.approved, request.note, now);
    }

    let _ = state
        .event_bus()
        .publish(PipelineEvent::MaterialReviewed(MaterialReviewedEvent {
            project_id: id,
            requirement_key: key.to_string(),
            approved: request.approved,
            timestamp: now,
        }));

    Ok(Json(load_status(&state, id).await?))
}

#[derive(Debug, Deserialize)]
struct ReminderQuery {
    #[serde(default = "default_trigger")]
    trigger: ReminderTrigger,
}

fn default_trigger() -> ReminderTrigger {
    ReminderTrigger::Manual
}

/// Build a nudge message for the project's outstanding items.
async fn project_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ReminderQuery>,
) -> ApiResult<Json<Value>> {
    let status = load_status(&state, id).await?;
    let message = generate_reminder(&status, query.trigger);
    Ok(Json(json!({
        "message": message,
        "complete": status.is_complete(),
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadQuery {
    path: String,
    #[serde(default = "default_content_type")]
    content_type: String,
}

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

/// Upload raw material bytes to the configured object store.
async fn upload_material(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> ApiResult<Json<StoredObject>> {
    if !state.projects().read().await.contains_key(&id) {
        return Err(ApiError::NotFound(format!("project '{id}'")));
    }
    let bucket = state
        .config()
        .storage
        .as_ref()
        .map(|s| s.bucket.clone())
        .unwrap_or_else(|| "materials".to_string());
    let path = format!("{id}/{}", query.path);
    let stored = state
        .store()
        .upload(&bucket, &path, body.to_vec(), &query.content_type)
        .await?;
    Ok(Json(stored))
}

/// Reconstruct the field definition a requirement was derived from.
fn field_from_requirement(requirement: &ContentRequirement) -> ContentField {
    let mut field = ContentField::new(
        requirement.key.field_id(),
        &requirement.label,
        requirement.field_type,
        requirement.required,
    );
    if let Some(validation) = &requirement.validation {
        field = field.with_validation(validation.clone());
    }
    field
}
