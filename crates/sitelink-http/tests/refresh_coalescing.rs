//! Concurrent 401s must coalesce into a single token refresh.

use async_trait::async_trait;
use sitelink_http::client::{ApiClient, ApiRequest, ApiResponse, ClientConfig};
use sitelink_http::error::{ApiError, Result};
use sitelink_http::session::{MemorySessionStorage, TokenStore};
use sitelink_http::traits::Network;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

fn json_response(status: u16, body: serde_json::Value) -> ApiResponse {
    ApiResponse {
        status,
        headers: Default::default(),
        body: bytes::Bytes::from(serde_json::to_vec(&body).unwrap()),
    }
}

/// Backend double: one access token is valid at a time, refresh rotates it.
struct MockBackend {
    valid_token: Mutex<String>,
    next_token: Mutex<Vec<String>>,
    refresh_status: u16,
    refresh_calls: AtomicU32,
    data_calls: AtomicU32,
}

impl MockBackend {
    fn new(valid: &str) -> Self {
        Self {
            valid_token: Mutex::new(valid.to_string()),
            next_token: Mutex::new(vec!["T2".to_string()]),
            refresh_status: 200,
            refresh_calls: AtomicU32::new(0),
            data_calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Network for MockBackend {
    async fn fetch(&self, url: &str, req: ApiRequest) -> Result<ApiResponse> {
        if url.ends_with("/auth/refresh") {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
            if self.refresh_status != 200 {
                return Ok(json_response(
                    self.refresh_status,
                    serde_json::json!({"error": {"message": "refresh rejected"}}),
                ));
            }
            // Widen the race window so concurrent callers pile up on the gate.
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            let fresh = self
                .next_token
                .lock()
                .unwrap()
                .pop()
                .expect("refresh called more times than tokens were minted");
            *self.valid_token.lock().unwrap() = fresh.clone();
            return Ok(json_response(
                200,
                serde_json::json!({"access_token": fresh, "refresh_token": "R2"}),
            ));
        }

        self.data_calls.fetch_add(1, Ordering::SeqCst);
        let expected = format!("Bearer {}", self.valid_token.lock().unwrap());
        match req.extra_headers.get("Authorization") {
            Some(auth) if *auth == expected => {
                Ok(json_response(200, serde_json::json!({"ok": true})))
            }
            _ => Ok(json_response(
                401,
                serde_json::json!({"error": {"message": "token expired"}}),
            )),
        }
    }
}

async fn client_with(backend: Arc<MockBackend>) -> ApiClient {
    let tokens = TokenStore::new(Arc::new(MemorySessionStorage::new()));
    tokens.save_access_token("T1").await;
    tokens.save_refresh_token("R1").await;
    ApiClient::with_network(backend, ClientConfig::default(), tokens)
}

#[tokio::test]
async fn test_concurrent_401s_trigger_exactly_one_refresh() {
    // The backend only accepts T2; the store still holds T1.
    let backend = Arc::new(MockBackend::new("T2"));
    let client = client_with(backend.clone()).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.get(&format!("http://test/api/v1/projects/{}", i)).await
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap().expect("request should succeed after refresh");
        assert!(response.is_success());
    }

    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.tokens().access_token().await.as_deref(), Some("T2"));
}

#[tokio::test]
async fn test_refresh_then_retry_succeeds_sequentially() {
    let backend = Arc::new(MockBackend::new("T2"));
    let client = client_with(backend.clone()).await;

    let response = client.get("http://test/api/v1/statistics").await.unwrap();
    assert!(response.is_success());
    // One failed attempt, one refresh, one retry.
    assert_eq!(backend.data_calls.load(Ordering::SeqCst), 2);
    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejected_refresh_clears_session() {
    let mut backend = MockBackend::new("T2");
    backend.refresh_status = 401;
    let backend = Arc::new(backend);
    let client = client_with(backend.clone()).await;

    let err = client.get("http://test/api/v1/projects").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!client.tokens().is_logged_in().await);
}

#[tokio::test]
async fn test_unauthenticated_request_never_refreshes() {
    let backend = Arc::new(MockBackend::new("T2"));
    let client = client_with(backend.clone()).await;

    let response = client
        .fetch(
            "http://test/api/v1/auth/login",
            ApiRequest::post().unauthenticated(),
        )
        .await
        .unwrap();

    // No token attached, the mock sees no Authorization header and 401s,
    // and the client must surface that without a refresh attempt.
    assert_eq!(response.status, 401);
    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_token_read_at_request_time() {
    let backend = Arc::new(MockBackend::new("T2"));
    let client = client_with(backend.clone()).await;

    // Rotate the token behind the client's back; the next request must pick
    // it up without any refresh round-trip.
    client.tokens().save_access_token("T2").await;
    let response = client.get("http://test/api/v1/projects").await.unwrap();
    assert!(response.is_success());
    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
}
