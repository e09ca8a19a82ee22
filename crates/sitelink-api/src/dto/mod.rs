//! Request and response payloads, field names exactly as the backend
//! declares them. Optional fields on update requests follow
//! absence-means-unset semantics and are skipped during serialization.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod completion;
pub mod document;
pub mod project;
pub mod site;

pub use admin::{NotificationResponse, StatisticsResponse};
pub use auth::{LoginRequest, LoginResponse, RefreshRequest, TokenPairResponse, UserProfile};
pub use chat::{ChatHistoryResponse, ChatMessage, ChatSummary, HistoryQuery, SendMessageRequest};
pub use completion::CompletionResponse;
pub use document::{DocumentResponse, DocumentStatus, RejectRequest};
pub use project::{
    BatchDecisionRequest, BatchDecisionResponse, ProjectCreateRequest, ProjectResponse,
    ProjectStatus, ProjectStatusRequest, ProjectUpdateRequest, StageCreateRequest, StageResponse,
    StageStatus, StageUpdateRequest,
};
pub use site::{CameraResponse, SiteResponse};
