//! Repository behavior over a scripted transport.

use async_trait::async_trait;
use sitelink_api::api::{DocumentsApi, ProjectsApi};
use sitelink_api::dto::DocumentStatus;
use sitelink_api::repository::{ApiResult, DocumentRepository, ProjectRepository};
use sitelink_api::ApiConfig;
use sitelink_http::client::{ApiClient, ApiRequest, ApiResponse, ClientConfig};
use sitelink_http::error::Result;
use sitelink_http::session::{MemorySessionStorage, TokenStore};
use sitelink_http::traits::Network;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Scripted transport: answers every request with a canned (status, body)
/// and records what was sent.
struct ScriptedNetwork {
    status: u16,
    body: String,
    calls: AtomicU32,
    last_request: Mutex<Option<(String, ApiRequest)>>,
}

impl ScriptedNetwork {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            calls: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Network for ScriptedNetwork {
    async fn fetch(&self, url: &str, req: ApiRequest) -> Result<ApiResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((url.to_string(), req));
        Ok(ApiResponse {
            status: self.status,
            headers: Default::default(),
            body: bytes::Bytes::from(self.body.clone()),
        })
    }
}

async fn api_parts(network: Arc<ScriptedNetwork>) -> (Arc<ApiClient>, Arc<ApiConfig>) {
    let tokens = TokenStore::new(Arc::new(MemorySessionStorage::new()));
    tokens.save_access_token("token").await;
    let client = Arc::new(ApiClient::with_network(
        network,
        ClientConfig::default(),
        tokens,
    ));
    let config = Arc::new(ApiConfig::new("http://test"));
    (client, config)
}

fn document_json(id: Uuid, status: &str, reason: Option<&str>) -> String {
    serde_json::json!({
        "id": id,
        "project_id": null,
        "title": "Act of acceptance",
        "file_url": "http://test/files/act.pdf",
        "uploaded_by": "foreman",
        "status": status,
        "reject_reason": reason,
        "created_at": "2026-02-11T08:30:00Z",
    })
    .to_string()
}

#[tokio::test]
async fn test_empty_reject_reason_fails_before_network() {
    let network = Arc::new(ScriptedNetwork::new(200, "{}"));
    let (client, config) = api_parts(network.clone()).await;
    let repo = DocumentRepository::new(DocumentsApi::new(client, config));

    let result = repo.reject_document(Uuid::new_v4(), "   ").await;
    assert_eq!(
        result,
        ApiResult::Error("A rejection reason is required.".to_string())
    );
    assert_eq!(network.calls.load(Ordering::SeqCst), 0, "no request issued");
}

#[tokio::test]
async fn test_reject_sends_trimmed_reason() {
    let id = Uuid::new_v4();
    let body = document_json(id, "rejected", Some("missing signature"));
    let network = Arc::new(ScriptedNetwork::new(200, &body));
    let (client, config) = api_parts(network.clone()).await;
    let repo = DocumentRepository::new(DocumentsApi::new(client, config));

    let result = repo.reject_document(id, "  missing signature  ").await;
    let document = result.success().expect("rejection should succeed");
    assert_eq!(document.status, DocumentStatus::Rejected);
    assert_eq!(document.reject_reason.as_deref(), Some("missing signature"));

    let (url, req) = network.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(url, format!("http://test/api/v1/documents/{}/reject", id));
    let sent: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(sent, serde_json::json!({"reason": "missing signature"}));
}

#[tokio::test]
async fn test_batch_reject_requires_reason() {
    let network = Arc::new(ScriptedNetwork::new(200, "{}"));
    let (client, config) = api_parts(network.clone()).await;
    let repo = ProjectRepository::new(ProjectsApi::new(client, config));

    let result = repo.reject_projects(vec![Uuid::new_v4()], "").await;
    assert!(!result.is_success());
    assert_eq!(network.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_server_error_message_reaches_caller() {
    let network = Arc::new(ScriptedNetwork::new(
        409,
        r#"{"error":{"message":"Stage is already closed"}}"#,
    ));
    let (client, config) = api_parts(network.clone()).await;
    let repo = ProjectRepository::new(ProjectsApi::new(client, config));

    let result = repo.delete_stage(Uuid::new_v4(), Uuid::new_v4()).await;
    assert_eq!(result, ApiResult::Error("Stage is already closed".to_string()));
}

#[tokio::test]
async fn test_transport_failure_maps_to_connectivity_message() {
    struct DeadNetwork;

    #[async_trait]
    impl Network for DeadNetwork {
        async fn fetch(&self, _url: &str, _req: ApiRequest) -> Result<ApiResponse> {
            Err(sitelink_http::ApiError::Transport(
                "connection refused".to_string(),
            ))
        }
    }

    let tokens = TokenStore::new(Arc::new(MemorySessionStorage::new()));
    let client = Arc::new(ApiClient::with_network(
        Arc::new(DeadNetwork),
        ClientConfig::default(),
        tokens,
    ));
    let config = Arc::new(ApiConfig::new("http://test"));
    let repo = ProjectRepository::new(ProjectsApi::new(client, config));

    let result = repo.list_projects().await;
    assert_eq!(
        result,
        ApiResult::Error(
            "Could not reach the server. Check your connection and try again.".to_string()
        )
    );
}

#[tokio::test]
async fn test_list_projects_decodes_payload() {
    let id = Uuid::new_v4();
    let body = serde_json::json!([{
        "id": id,
        "name": "Residential block A",
        "description": null,
        "address": "12 Builder St",
        "status": "active",
        "site_id": null,
        "start_date": "2026-01-10T00:00:00Z",
        "end_date": null,
        "created_at": "2025-12-01T10:00:00Z",
        "updated_at": "2026-02-01T10:00:00Z",
    }])
    .to_string();
    let network = Arc::new(ScriptedNetwork::new(200, &body));
    let (client, config) = api_parts(network.clone()).await;
    let repo = ProjectRepository::new(ProjectsApi::new(client, config));

    let projects = repo.list_projects().await.success().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, id);
    assert_eq!(projects[0].name, "Residential block A");
}
