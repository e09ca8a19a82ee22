pub mod client;
pub mod error;
pub mod session;
pub mod traits;

pub use client::{ApiClient, ApiRequest, ApiResponse, ClientConfig};
pub use error::{ApiError, Result};
pub use session::{Session, TokenStore};
