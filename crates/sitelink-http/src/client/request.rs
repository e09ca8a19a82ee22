//! Request parameters for a single API call.

use crate::error::Result;

/// Parameters for a single API call.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: String,
    pub body: bytes::Bytes,
    pub content_type: Option<String>,
    pub query: Vec<(String, String)>,
    pub extra_headers: std::collections::BTreeMap<String, String>,
    /// Whether a bearer token should be attached. Login and refresh
    /// requests opt out.
    pub authenticated: bool,
}

impl Default for ApiRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiRequest {
    #[inline]
    pub fn new() -> Self {
        Self {
            method: "GET".to_string(),
            body: bytes::Bytes::new(),
            content_type: None,
            query: Vec::new(),
            extra_headers: std::collections::BTreeMap::new(),
            authenticated: true,
        }
    }

    pub fn get() -> Self {
        Self::new()
    }

    pub fn post() -> Self {
        Self::new().with_method("POST")
    }

    pub fn put() -> Self {
        Self::new().with_method("PUT")
    }

    pub fn patch() -> Self {
        Self::new().with_method("PATCH")
    }

    pub fn delete() -> Self {
        Self::new().with_method("DELETE")
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<bytes::Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Serialize `value` as the JSON request body.
    pub fn with_json<T: serde::Serialize>(mut self, value: &T) -> Result<Self> {
        self.body = bytes::Bytes::from(serde_json::to_vec(value)?);
        self.content_type = Some("application/json".to_string());
        Ok(self)
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Skip bearer token attachment for this request.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = ApiRequest::post()
            .with_query("limit", "20")
            .with_header("X-Client", "admin")
            .unauthenticated();

        assert_eq!(req.method, "POST");
        assert_eq!(req.query, vec![("limit".to_string(), "20".to_string())]);
        assert_eq!(req.extra_headers.get("X-Client").unwrap(), "admin");
        assert!(!req.authenticated);
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = ApiRequest::post()
            .with_json(&serde_json::json!({"name": "Block A"}))
            .unwrap();
        assert_eq!(req.content_type.as_deref(), Some("application/json"));
        assert!(!req.body.is_empty());
    }
}
