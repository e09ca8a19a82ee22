use crate::config::ApiConfig;
use crate::dto::{LoginRequest, LoginResponse, RefreshRequest, TokenPairResponse};
use sitelink_http::client::ApiRequest;
use sitelink_http::{ApiClient, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    /// Exchange credentials for a token pair and profile. Sent without a
    /// bearer token: there is no session yet.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.client
            .fetch(
                &self.config.auth_login(),
                ApiRequest::post().with_json(request)?.unauthenticated(),
            )
            .await?
            .error_for_status()?
            .json()
    }

    /// Manual token refresh. The session layer normally does this on its
    /// own; this endpoint exists for explicit re-validation flows.
    pub async fn refresh(&self, request: &RefreshRequest) -> Result<TokenPairResponse> {
        self.client
            .fetch(
                &self.config.auth_refresh(),
                ApiRequest::post().with_json(request)?.unauthenticated(),
            )
            .await?
            .error_for_status()?
            .json()
    }

    /// Invalidate the session server-side.
    pub async fn logout(&self) -> Result<()> {
        self.client.post(&self.config.auth_logout()).await?;
        Ok(())
    }
}
