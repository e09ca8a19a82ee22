use crate::config::ApiConfig;
use crate::dto::CompletionResponse;
use sitelink_http::{ApiClient, Result};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct CompletionApi {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl CompletionApi {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    pub async fn list_completions(&self, project_id: Uuid) -> Result<Vec<CompletionResponse>> {
        self.client
            .get(&self.config.project_completions(&project_id.to_string()))
            .await?
            .json()
    }

    pub async fn get_completion(
        &self,
        project_id: Uuid,
        completion_id: Uuid,
    ) -> Result<CompletionResponse> {
        self.client
            .get(
                &self
                    .config
                    .project_completion(&project_id.to_string(), &completion_id.to_string()),
            )
            .await?
            .json()
    }
}
