use crate::config::ApiConfig;
use crate::dto::{DocumentResponse, RejectRequest};
use sitelink_http::{ApiClient, Result};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct DocumentsApi {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl DocumentsApi {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    pub async fn list_documents(&self) -> Result<Vec<DocumentResponse>> {
        self.client.get(&self.config.documents()).await?.json()
    }

    pub async fn get_document(&self, id: Uuid) -> Result<DocumentResponse> {
        self.client
            .get(&self.config.document(&id.to_string()))
            .await?
            .json()
    }

    pub async fn approve_document(&self, id: Uuid) -> Result<DocumentResponse> {
        self.client
            .post(&self.config.document_approve(&id.to_string()))
            .await?
            .json()
    }

    pub async fn reject_document(&self, id: Uuid, request: &RejectRequest) -> Result<DocumentResponse> {
        self.client
            .post_json(&self.config.document_reject(&id.to_string()), request)
            .await?
            .json()
    }
}
