//! Decoded API response.

use crate::error::{ApiError, Result};
use serde::Deserialize;

/// A response from the backend: status, headers, raw body.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: std::collections::BTreeMap<String, String>,
    pub body: bytes::Bytes,
}

/// Error body shape the backend uses: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ApiResponse {
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Map a non-2xx response to `ApiError::Status`, extracting the server's
    /// error message when the body carries one.
    pub fn error_for_status(self) -> Result<ApiResponse> {
        if self.is_success() {
            return Ok(self);
        }

        let message = serde_json::from_slice::<ErrorBody>(&self.body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| {
                let text = self.text();
                if text.trim().is_empty() {
                    format!("request failed with status {}", self.status)
                } else {
                    text
                }
            });

        Err(ApiError::Status {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: Default::default(),
            body: bytes::Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    #[test]
    fn test_success_passthrough() {
        let resp = response(200, "{}");
        assert!(resp.error_for_status().is_ok());
    }

    #[test]
    fn test_error_message_extracted() {
        let resp = response(409, r#"{"error":{"message":"Project already exists"}}"#);
        match resp.error_for_status() {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message, "Project already exists");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_fallback_to_text() {
        let resp = response(500, "Internal Server Error");
        match resp.error_for_status() {
            Err(ApiError::Status { message, .. }) => {
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_fallback_to_status() {
        let resp = response(502, "");
        match resp.error_for_status() {
            Err(ApiError::Status { message, .. }) => {
                assert!(message.contains("502"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
