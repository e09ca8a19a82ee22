//! Feature API wrappers: one struct per domain area, one method per
//! backend endpoint. Errors propagate as [`sitelink_http::ApiError`]; the
//! repository layer turns them into user-facing results.

pub mod admin;
pub mod auth;
pub mod chats;
pub mod completion;
pub mod documents;
pub mod projects;
pub mod sites;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use chats::ChatsApi;
pub use completion::CompletionApi;
pub use documents::DocumentsApi;
pub use projects::ProjectsApi;
pub use sites::SitesApi;
