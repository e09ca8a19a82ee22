use crate::api::CompletionApi;
use crate::dto::CompletionResponse;
use crate::repository::ApiResult;
use uuid::Uuid;

#[derive(Clone)]
pub struct CompletionRepository {
    api: CompletionApi,
}

impl CompletionRepository {
    pub fn new(api: CompletionApi) -> Self {
        Self { api }
    }

    pub async fn list_completions(&self, project_id: Uuid) -> ApiResult<Vec<CompletionResponse>> {
        self.api.list_completions(project_id).await.into()
    }

    pub async fn get_completion(
        &self,
        project_id: Uuid,
        completion_id: Uuid,
    ) -> ApiResult<CompletionResponse> {
        self.api
            .get_completion(project_id, completion_id)
            .await
            .into()
    }
}
