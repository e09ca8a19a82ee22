//! Configuration for the SiteLink HTTP client.

/// Configuration for the SiteLink HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Path of the token refresh endpoint, relative to the base URL.
    pub refresh_path: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Connection timeout in seconds.
    pub connection_timeout_secs: u64,
    /// Maximum idle connections kept per host.
    pub max_idle_per_host: u32,
    /// Proxy URL (optional).
    pub proxy_url: String,
    /// Enable request logging.
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:8080".to_string(),
            refresh_path: "/api/v1/auth/refresh".to_string(),
            request_timeout_ms: 30000,
            connection_timeout_secs: 30,
            max_idle_per_host: 32,
            proxy_url: String::new(),
            enable_logging: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: trim_trailing_slash(base_url.into()),
            ..Default::default()
        }
    }

    /// Full URL of the token refresh endpoint.
    pub fn refresh_url(&self) -> String {
        format!("{}{}", self.base_url, self.refresh_path)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.refresh_path, "/api/v1/auth/refresh");
        assert_eq!(config.request_timeout_ms, 30000);
        assert_eq!(config.connection_timeout_secs, 30);
        assert_eq!(config.max_idle_per_host, 32);
        assert_eq!(config.proxy_url, "");
        assert!(!config.enable_logging);
    }

    #[test]
    fn test_base_url_normalized() {
        let config = ClientConfig::with_base_url("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(
            config.refresh_url(),
            "https://api.example.com/api/v1/auth/refresh"
        );
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig {
            request_timeout_ms: 5000,
            ..Default::default()
        };
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.connection_timeout_secs, 30);
    }
}
