//! Repositories: one per domain, each method calls exactly one API method
//! and folds the outcome into [`ApiResult`]. Exceptions never cross this
//! boundary; the UI receives either a value or a message it can show.

pub mod admin;
pub mod auth;
pub mod chats;
pub mod completion;
pub mod documents;
pub mod projects;
pub mod sites;

pub use admin::AdminRepository;
pub use auth::AuthRepository;
pub use chats::ChatRepository;
pub use completion::CompletionRepository;
pub use documents::DocumentRepository;
pub use projects::ProjectRepository;
pub use sites::SiteRepository;

use sitelink_http::ApiError;

/// Outcome of a repository operation: a value or a user-facing message,
/// never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Error(String),
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiResult::Success(value) => Some(value),
            ApiResult::Error(_) => None,
        }
    }

    pub fn error(self) -> Option<String> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Error(message) => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::Error(message) => ApiResult::Error(message),
        }
    }
}

impl<T> From<sitelink_http::Result<T>> for ApiResult<T> {
    fn from(result: sitelink_http::Result<T>) -> Self {
        match result {
            Ok(value) => ApiResult::Success(value),
            Err(err) => {
                tracing::debug!("api call failed: {}", err);
                ApiResult::Error(user_message(&err))
            }
        }
    }
}

/// Translate an error into the message the UI shows.
fn user_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => {
            "Could not reach the server. Check your connection and try again.".to_string()
        }
        ApiError::Status { message, .. } => message.clone(),
        ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
        ApiError::Decode(_) => "The server returned an unexpected response.".to_string(),
        ApiError::Config(msg) | ApiError::Storage(msg) => msg.clone(),
    }
}

pub(crate) const EMPTY_REASON_MESSAGE: &str = "A rejection reason is required.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_gets_generic_message() {
        let result: ApiResult<()> =
            Err::<(), _>(ApiError::Transport("connection refused".into())).into();
        assert_eq!(
            result,
            ApiResult::Error(
                "Could not reach the server. Check your connection and try again.".to_string()
            )
        );
    }

    #[test]
    fn test_status_error_surfaces_server_message() {
        let result: ApiResult<()> = Err::<(), _>(ApiError::Status {
            status: 409,
            message: "Project already exists".into(),
        })
        .into();
        assert_eq!(
            result,
            ApiResult::Error("Project already exists".to_string())
        );
    }

    #[test]
    fn test_map_preserves_error() {
        let result: ApiResult<u32> = ApiResult::Error("nope".into());
        assert_eq!(result.map(|v| v + 1), ApiResult::Error("nope".into()));
    }
}
