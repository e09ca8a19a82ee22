use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded completion entry for a project (optionally tied to a stage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub stage_id: Option<Uuid>,
    pub summary: String,
    pub progress_percent: u32,
    pub recorded_by: String,
    pub recorded_at: DateTime<Utc>,
}
