pub mod config;
pub mod fetch;
#[cfg(not(target_arch = "wasm32"))]
pub mod native_network;
pub mod request;
pub mod response;
pub mod retry;
#[cfg(target_arch = "wasm32")]
pub mod wasm_network;

pub use config::ClientConfig;
pub use fetch::ApiClient;
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use retry::{Backoff, BackoffConfig, BackoffDecision};
