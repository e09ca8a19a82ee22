use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("websocket connect failed: {0}")]
    Connect(String),

    #[error("websocket error: {0}")]
    Socket(String),

    #[error(transparent)]
    Api(#[from] sitelink_http::ApiError),
}

pub type Result<T> = std::result::Result<T, ChatError>;
