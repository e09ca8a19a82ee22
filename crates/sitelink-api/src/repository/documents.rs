use crate::api::DocumentsApi;
use crate::dto::{DocumentResponse, RejectRequest};
use crate::repository::{ApiResult, EMPTY_REASON_MESSAGE};
use uuid::Uuid;

#[derive(Clone)]
pub struct DocumentRepository {
    api: DocumentsApi,
}

impl DocumentRepository {
    pub fn new(api: DocumentsApi) -> Self {
        Self { api }
    }

    pub async fn list_documents(&self) -> ApiResult<Vec<DocumentResponse>> {
        self.api.list_documents().await.into()
    }

    pub async fn get_document(&self, id: Uuid) -> ApiResult<DocumentResponse> {
        self.api.get_document(id).await.into()
    }

    pub async fn approve_document(&self, id: Uuid) -> ApiResult<DocumentResponse> {
        self.api.approve_document(id).await.into()
    }

    /// A rejected document always carries a non-empty reason; a blank one
    /// is refused before the network call.
    pub async fn reject_document(&self, id: Uuid, reason: &str) -> ApiResult<DocumentResponse> {
        if reason.trim().is_empty() {
            return ApiResult::Error(EMPTY_REASON_MESSAGE.to_string());
        }
        let request = RejectRequest {
            reason: reason.trim().to_string(),
        };
        self.api.reject_document(id, &request).await.into()
    }
}
