use crate::api::ProjectsApi;
use crate::dto::{
    BatchDecisionRequest, BatchDecisionResponse, ProjectCreateRequest, ProjectResponse,
    ProjectStatusRequest, ProjectUpdateRequest, StageCreateRequest, StageResponse,
    StageUpdateRequest,
};
use crate::repository::{ApiResult, EMPTY_REASON_MESSAGE};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectRepository {
    api: ProjectsApi,
}

impl ProjectRepository {
    pub fn new(api: ProjectsApi) -> Self {
        Self { api }
    }

    pub async fn list_projects(&self) -> ApiResult<Vec<ProjectResponse>> {
        self.api.list_projects().await.into()
    }

    pub async fn get_project(&self, id: Uuid) -> ApiResult<ProjectResponse> {
        self.api.get_project(id).await.into()
    }

    pub async fn create_project(&self, request: &ProjectCreateRequest) -> ApiResult<ProjectResponse> {
        self.api.create_project(request).await.into()
    }

    pub async fn update_project(
        &self,
        id: Uuid,
        request: &ProjectUpdateRequest,
    ) -> ApiResult<ProjectResponse> {
        self.api.update_project(id, request).await.into()
    }

    pub async fn delete_project(&self, id: Uuid) -> ApiResult<()> {
        self.api.delete_project(id).await.into()
    }

    pub async fn set_project_status(
        &self,
        id: Uuid,
        request: &ProjectStatusRequest,
    ) -> ApiResult<ProjectResponse> {
        self.api.set_project_status(id, request).await.into()
    }

    pub async fn list_stages(&self, project_id: Uuid) -> ApiResult<Vec<StageResponse>> {
        self.api.list_stages(project_id).await.into()
    }

    pub async fn get_stage(&self, project_id: Uuid, stage_id: Uuid) -> ApiResult<StageResponse> {
        self.api.get_stage(project_id, stage_id).await.into()
    }

    pub async fn create_stage(
        &self,
        project_id: Uuid,
        request: &StageCreateRequest,
    ) -> ApiResult<StageResponse> {
        self.api.create_stage(project_id, request).await.into()
    }

    pub async fn update_stage(
        &self,
        project_id: Uuid,
        stage_id: Uuid,
        request: &StageUpdateRequest,
    ) -> ApiResult<StageResponse> {
        self.api
            .update_stage(project_id, stage_id, request)
            .await
            .into()
    }

    pub async fn delete_stage(&self, project_id: Uuid, stage_id: Uuid) -> ApiResult<()> {
        self.api.delete_stage(project_id, stage_id).await.into()
    }

    pub async fn approve_projects(&self, ids: Vec<Uuid>) -> ApiResult<BatchDecisionResponse> {
        let request = BatchDecisionRequest { ids, reason: None };
        self.api.approve_projects(&request).await.into()
    }

    /// Batch rejection requires a reason; an empty one fails validation
    /// before any request is issued.
    pub async fn reject_projects(
        &self,
        ids: Vec<Uuid>,
        reason: &str,
    ) -> ApiResult<BatchDecisionResponse> {
        if reason.trim().is_empty() {
            return ApiResult::Error(EMPTY_REASON_MESSAGE.to_string());
        }
        let request = BatchDecisionRequest {
            ids,
            reason: Some(reason.trim().to_string()),
        };
        self.api.reject_projects(&request).await.into()
    }
}
