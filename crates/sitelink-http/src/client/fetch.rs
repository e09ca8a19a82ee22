//! Token-aware API client.
//!
//! Attaches a bearer token read from the [`TokenStore`] at request time, and
//! recovers from authorization expiry with a single coalesced token refresh
//! followed by one retry of the original request.

use crate::client::config::ClientConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::client::native_network::NativeNetwork;
#[cfg(target_arch = "wasm32")]
use crate::client::wasm_network::WasmNetwork;
use crate::client::{ApiRequest, ApiResponse};
use crate::error::{ApiError, Result};
use crate::session::TokenStore;
use crate::traits::Network;
use serde::Deserialize;
use std::sync::Arc;

const AUTHORIZATION: &str = "Authorization";

/// Token pair returned by the refresh endpoint.
#[derive(Debug, Deserialize)]
struct RefreshedTokens {
    access_token: String,
    refresh_token: Option<String>,
}

#[derive(serde::Serialize)]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

/// The main API client.
#[derive(Clone)]
pub struct ApiClient {
    network: Arc<dyn Network>,
    config: Arc<ClientConfig>,
    tokens: TokenStore,
    /// Serializes token refresh attempts: concurrent 401s queue here and at
    /// most one refresh call reaches the network.
    refresh_gate: Arc<tokio::sync::Mutex<()>>,
}

impl ApiClient {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: ClientConfig, tokens: TokenStore) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(std::time::Duration::from_secs(
                config.connection_timeout_secs,
            ))
            .pool_max_idle_per_host(config.max_idle_per_host as usize);

        if !config.proxy_url.is_empty() {
            if let Ok(proxy) = reqwest::Proxy::all(&config.proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .user_agent(concat!("sitelink-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self::with_network(
            Arc::new(NativeNetwork::new(client)),
            config,
            tokens,
        ))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(config: ClientConfig, tokens: TokenStore) -> Result<Self> {
        Ok(Self::with_network(Arc::new(WasmNetwork), config, tokens))
    }

    /// Build a client over an explicit transport. Tests use this to script
    /// responses without a live server.
    pub fn with_network(
        network: Arc<dyn Network>,
        config: ClientConfig,
        tokens: TokenStore,
    ) -> Self {
        ApiClient {
            network,
            config: Arc::new(config),
            tokens,
            refresh_gate: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub async fn get(&self, url: &str) -> Result<ApiResponse> {
        self.fetch(url, ApiRequest::get()).await?.error_for_status()
    }

    pub async fn delete(&self, url: &str) -> Result<ApiResponse> {
        self.fetch(url, ApiRequest::delete())
            .await?
            .error_for_status()
    }

    pub async fn post(&self, url: &str) -> Result<ApiResponse> {
        self.fetch(url, ApiRequest::post())
            .await?
            .error_for_status()
    }

    pub async fn post_json<T: serde::Serialize>(&self, url: &str, body: &T) -> Result<ApiResponse> {
        self.fetch(url, ApiRequest::post().with_json(body)?)
            .await?
            .error_for_status()
    }

    pub async fn put_json<T: serde::Serialize>(&self, url: &str, body: &T) -> Result<ApiResponse> {
        self.fetch(url, ApiRequest::put().with_json(body)?)
            .await?
            .error_for_status()
    }

    pub async fn patch_json<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<ApiResponse> {
        self.fetch(url, ApiRequest::patch().with_json(body)?)
            .await?
            .error_for_status()
    }

    /// Perform a request, attaching the current access token and recovering
    /// from a 401 with one refresh-and-retry cycle.
    pub async fn fetch(&self, url: &str, request: ApiRequest) -> Result<ApiResponse> {
        // The token is read per request, not cached at construction: it
        // changes underneath us on login and refresh.
        let token = if request.authenticated {
            self.tokens.access_token().await
        } else {
            None
        };

        let mut attempt = request.clone();
        if let Some(t) = &token {
            attempt = attempt.with_header(AUTHORIZATION, format!("Bearer {}", t));
        }

        self.log_request(url, &attempt);
        let response = self.network.fetch(url, attempt).await?;
        self.log_response(url, &response);

        if !response.is_unauthorized() || !request.authenticated {
            return Ok(response);
        }

        tracing::debug!("401 from {}, attempting token refresh", url);
        let fresh = self.refresh_access_token(token.as_deref()).await?;

        let retry = request.with_header(AUTHORIZATION, format!("Bearer {}", fresh));
        self.log_request(url, &retry);
        let response = self.network.fetch(url, retry).await?;
        self.log_response(url, &response);

        if response.is_unauthorized() {
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Single-flight: callers serialize on the refresh gate, and whoever
    /// acquires it first performs the network call. Later callers find the
    /// token already rotated away from `stale` and reuse it directly.
    async fn refresh_access_token(&self, stale: Option<&str>) -> Result<String> {
        let _gate = self.refresh_gate.lock().await;

        if let Some(current) = self.tokens.access_token().await {
            if Some(current.as_str()) != stale {
                tracing::debug!("token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let refresh_token = self
            .tokens
            .refresh_token()
            .await
            .ok_or(ApiError::Unauthorized)?;

        let request = ApiRequest::post()
            .with_json(&RefreshBody {
                refresh_token: &refresh_token,
            })?
            .unauthenticated();

        // Transport failures propagate without touching the session; the
        // caller can retry later with the same refresh token.
        let response = self.network.fetch(&self.config.refresh_url(), request).await?;

        if (400..500).contains(&response.status) {
            // The refresh token itself was rejected. The session is over.
            tracing::info!(
                "refresh token rejected ({}), clearing session",
                response.status
            );
            self.tokens.clear().await;
            return Err(ApiError::Unauthorized);
        }

        // 5xx surfaces as a status error and leaves the session intact.
        let response = response.error_for_status()?;
        let pair: RefreshedTokens = response.json()?;
        self.tokens.save_access_token(&pair.access_token).await;
        if let Some(rt) = &pair.refresh_token {
            self.tokens.save_refresh_token(rt).await;
        }
        tracing::debug!("access token refreshed");
        Ok(pair.access_token)
    }

    fn log_request(&self, url: &str, request: &ApiRequest) {
        if self.config.enable_logging {
            tracing::debug!("[SiteLink-Out] {} {}", request.method, url);
        }
    }

    fn log_response(&self, url: &str, response: &ApiResponse) {
        if self.config.enable_logging {
            tracing::debug!("[SiteLink-In] {} <- {}", response.status, url);
        }
    }
}
