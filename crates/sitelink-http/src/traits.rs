use crate::client::{ApiRequest, ApiResponse};
use crate::error::Result;
use async_trait::async_trait;

/// Abstraction for HTTP transport.
///
/// The native implementation wraps `reqwest`; tests substitute their own
/// implementation to script responses without a live server.
#[async_trait]
pub trait Network: Send + Sync + 'static {
    async fn fetch(&self, url: &str, req: ApiRequest) -> Result<ApiResponse>;
}

/// Abstraction for persistent key-value session storage.
///
/// One implementation per platform: a JSON file in the user data directory
/// on native targets, browser storage on the web, memory in tests.
#[async_trait]
pub trait SessionStorage: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
