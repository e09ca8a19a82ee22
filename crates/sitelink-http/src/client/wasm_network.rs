use crate::client::{ApiRequest, ApiResponse};
use crate::error::{ApiError, Result};
use crate::traits::Network;
use async_trait::async_trait;

pub struct WasmNetwork;

#[async_trait]
impl Network for WasmNetwork {
    async fn fetch(&self, _url: &str, _request: ApiRequest) -> Result<ApiResponse> {
        Err(ApiError::Config(
            "WasmNetwork::fetch not implemented yet".to_string(),
        ))
    }
}
