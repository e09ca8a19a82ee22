//! Endpoint table for the construction-management backend.
//!
//! Every REST path the client knows about lives here; the API wrappers only
//! ever ask this module for complete URLs.

use urlencoding::encode;

/// REST path constants, relative to the base URL.
pub mod paths {
    pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
    pub const AUTH_REFRESH: &str = "/api/v1/auth/refresh";
    pub const AUTH_LOGOUT: &str = "/api/v1/auth/logout";
    pub const PROJECTS: &str = "/api/v1/projects";
    pub const PROJECTS_APPROVE: &str = "/api/v1/projects/approve";
    pub const PROJECTS_REJECT: &str = "/api/v1/projects/reject";
    pub const DOCUMENTS: &str = "/api/v1/documents";
    pub const SITES: &str = "/api/v1/sites";
    pub const STATISTICS: &str = "/api/v1/admin/statistics";
    pub const NOTIFICATIONS: &str = "/api/v1/admin/notifications";
    pub const CHATS: &str = "/api/v1/chats";
    pub const WS_CHATS: &str = "/ws/chats";
}

/// Resolved backend addresses.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: String,
    ws_base_url: String,
}

impl ApiConfig {
    /// Derive the WebSocket base from the HTTP base (`http` → `ws`,
    /// `https` → `wss`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = trim_trailing_slash(base_url.into());
        let ws_base_url = if let Some(rest) = base_url.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = base_url.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            format!("ws://{}", base_url)
        };
        Self {
            base_url,
            ws_base_url,
        }
    }

    pub fn with_ws_base_url(mut self, ws_base_url: impl Into<String>) -> Self {
        self.ws_base_url = trim_trailing_slash(ws_base_url.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // -- auth --

    pub fn auth_login(&self) -> String {
        self.url(paths::AUTH_LOGIN)
    }

    pub fn auth_refresh(&self) -> String {
        self.url(paths::AUTH_REFRESH)
    }

    pub fn auth_logout(&self) -> String {
        self.url(paths::AUTH_LOGOUT)
    }

    // -- projects and stages --

    pub fn projects(&self) -> String {
        self.url(paths::PROJECTS)
    }

    pub fn project(&self, id: &str) -> String {
        format!("{}/{}", self.projects(), encode(id))
    }

    pub fn project_status(&self, id: &str) -> String {
        format!("{}/status", self.project(id))
    }

    pub fn project_stages(&self, project_id: &str) -> String {
        format!("{}/stages", self.project(project_id))
    }

    pub fn project_stage(&self, project_id: &str, stage_id: &str) -> String {
        format!("{}/{}", self.project_stages(project_id), encode(stage_id))
    }

    pub fn projects_approve(&self) -> String {
        self.url(paths::PROJECTS_APPROVE)
    }

    pub fn projects_reject(&self) -> String {
        self.url(paths::PROJECTS_REJECT)
    }

    // -- documents --

    pub fn documents(&self) -> String {
        self.url(paths::DOCUMENTS)
    }

    pub fn document(&self, id: &str) -> String {
        format!("{}/{}", self.documents(), encode(id))
    }

    pub fn document_approve(&self, id: &str) -> String {
        format!("{}/approve", self.document(id))
    }

    pub fn document_reject(&self, id: &str) -> String {
        format!("{}/reject", self.document(id))
    }

    // -- construction sites and cameras --

    pub fn sites(&self) -> String {
        self.url(paths::SITES)
    }

    pub fn site(&self, id: &str) -> String {
        format!("{}/{}", self.sites(), encode(id))
    }

    pub fn site_cameras(&self, site_id: &str) -> String {
        format!("{}/cameras", self.site(site_id))
    }

    pub fn site_camera(&self, site_id: &str, camera_id: &str) -> String {
        format!("{}/{}", self.site_cameras(site_id), encode(camera_id))
    }

    // -- completion records --

    pub fn project_completions(&self, project_id: &str) -> String {
        format!("{}/completions", self.project(project_id))
    }

    pub fn project_completion(&self, project_id: &str, completion_id: &str) -> String {
        format!(
            "{}/{}",
            self.project_completions(project_id),
            encode(completion_id)
        )
    }

    // -- admin --

    pub fn statistics(&self) -> String {
        self.url(paths::STATISTICS)
    }

    pub fn notifications(&self) -> String {
        self.url(paths::NOTIFICATIONS)
    }

    pub fn notification_read(&self, id: &str) -> String {
        format!("{}/{}/read", self.notifications(), encode(id))
    }

    // -- chats --

    pub fn chats(&self) -> String {
        self.url(paths::CHATS)
    }

    pub fn chat_messages(&self, chat_id: &str) -> String {
        format!("{}/{}/messages", self.chats(), encode(chat_id))
    }

    /// WebSocket endpoint delivering live events for one chat.
    pub fn chat_socket(&self, chat_id: &str) -> String {
        format!("{}{}/{}", self.ws_base_url, paths::WS_CHATS, encode(chat_id))
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
    fn test_ws_url_derived_from_base() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.chat_socket("c1"),
            "wss://api.example.com/ws/chats/c1"
        );

        let config = ApiConfig::new("http://localhost:8080");
        assert_eq!(
            config.chat_socket("c1"),
            "ws://localhost:8080/ws/chats/c1"
        );
    }

    #[test]
    fn test_nested_paths() {
        let config = ApiConfig::new("http://localhost:8080");
        assert_eq!(
            config.project_stage("p1", "s2"),
            "http://localhost:8080/api/v1/projects/p1/stages/s2"
        );
        assert_eq!(
            config.site_camera("s1", "cam9"),
            "http://localhost:8080/api/v1/sites/s1/cameras/cam9"
        );
    }

    #[test]
    fn test_path_params_encoded() {
        let config = ApiConfig::new("http://localhost:8080");
        assert_eq!(
            config.document("a b/c"),
            "http://localhost:8080/api/v1/documents/a%20b%2Fc"
        );
    }
}
