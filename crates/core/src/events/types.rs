use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events emitted by the content pipeline, consumed by in-process listeners.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PipelineEvent {
    Welcome,
    MaterialSubmitted(MaterialSubmittedEvent),
    MaterialReviewed(MaterialReviewedEvent),
    ChecklistRegenerated(ChecklistRegeneratedEvent),
    Reconnect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSubmittedEvent {
    pub project_id: Uuid,
    pub requirement_key: String,
    pub resubmission: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialReviewedEvent {
    pub project_id: Uuid,
    pub requirement_key: String,
    pub approved: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRegeneratedEvent {
    pub project_id: Uuid,
    pub template_id: String,
    pub requirement_count: usize,
    pub timestamp: DateTime<Utc>,
}
