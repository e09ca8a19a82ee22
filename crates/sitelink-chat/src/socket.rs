//! WebSocket connection plumbing.

use crate::error::{ChatError, Result};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub type ChatSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Open the chat socket, attaching the bearer token when one is present.
pub async fn connect(url: &str, access_token: Option<&str>) -> Result<ChatSocket> {
    let mut request = url
        .into_client_request()
        .map_err(|e| ChatError::Connect(e.to_string()))?;

    if let Some(token) = access_token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ChatError::Connect(e.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, value);
    }

    let (stream, response) = timeout(CONNECT_TIMEOUT, connect_async(request))
        .await
        .map_err(|_| ChatError::Connect(format!("timed out connecting to {}", url)))?
        .map_err(|e| ChatError::Connect(e.to_string()))?;

    tracing::debug!("chat socket open: {} ({})", url, response.status());
    Ok(stream)
}
