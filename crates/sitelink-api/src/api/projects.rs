use crate::config::ApiConfig;
use crate::dto::{
    BatchDecisionRequest, BatchDecisionResponse, ProjectCreateRequest, ProjectResponse,
    ProjectStatusRequest, ProjectUpdateRequest, StageCreateRequest, StageResponse,
    StageUpdateRequest,
};
use sitelink_http::{ApiClient, Result};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectsApi {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl ProjectsApi {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectResponse>> {
        self.client.get(&self.config.projects()).await?.json()
    }

    pub async fn get_project(&self, id: Uuid) -> Result<ProjectResponse> {
        self.client
            .get(&self.config.project(&id.to_string()))
            .await?
            .json()
    }

    pub async fn create_project(&self, request: &ProjectCreateRequest) -> Result<ProjectResponse> {
        self.client
            .post_json(&self.config.projects(), request)
            .await?
            .json()
    }

    pub async fn update_project(
        &self,
        id: Uuid,
        request: &ProjectUpdateRequest,
    ) -> Result<ProjectResponse> {
        self.client
            .patch_json(&self.config.project(&id.to_string()), request)
            .await?
            .json()
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<()> {
        self.client
            .delete(&self.config.project(&id.to_string()))
            .await?;
        Ok(())
    }

    pub async fn set_project_status(
        &self,
        id: Uuid,
        request: &ProjectStatusRequest,
    ) -> Result<ProjectResponse> {
        self.client
            .put_json(&self.config.project_status(&id.to_string()), request)
            .await?
            .json()
    }

    pub async fn list_stages(&self, project_id: Uuid) -> Result<Vec<StageResponse>> {
        self.client
            .get(&self.config.project_stages(&project_id.to_string()))
            .await?
            .json()
    }

    pub async fn get_stage(&self, project_id: Uuid, stage_id: Uuid) -> Result<StageResponse> {
        self.client
            .get(
                &self
                    .config
                    .project_stage(&project_id.to_string(), &stage_id.to_string()),
            )
            .await?
            .json()
    }

    pub async fn create_stage(
        &self,
        project_id: Uuid,
        request: &StageCreateRequest,
    ) -> Result<StageResponse> {
        self.client
            .post_json(
                &self.config.project_stages(&project_id.to_string()),
                request,
            )
            .await?
            .json()
    }

    pub async fn update_stage(
        &self,
        project_id: Uuid,
        stage_id: Uuid,
        request: &StageUpdateRequest,
    ) -> Result<StageResponse> {
        self.client
            .patch_json(
                &self
                    .config
                    .project_stage(&project_id.to_string(), &stage_id.to_string()),
                request,
            )
            .await?
            .json()
    }

    pub async fn delete_stage(&self, project_id: Uuid, stage_id: Uuid) -> Result<()> {
        self.client
            .delete(
                &self
                    .config
                    .project_stage(&project_id.to_string(), &stage_id.to_string()),
            )
            .await?;
        Ok(())
    }

    pub async fn approve_projects(
        &self,
        request: &BatchDecisionRequest,
    ) -> Result<BatchDecisionResponse> {
        self.client
            .post_json(&self.config.projects_approve(), request)
            .await?
            .json()
    }

    pub async fn reject_projects(
        &self,
        request: &BatchDecisionRequest,
    ) -> Result<BatchDecisionResponse> {
        self.client
            .post_json(&self.config.projects_reject(), request)
            .await?
            .json()
    }
}
