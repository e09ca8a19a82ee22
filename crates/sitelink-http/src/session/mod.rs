//! Persisted session: token pair and user profile snapshot.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;

use crate::traits::SessionStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER_ID: &str = "user_id";
    pub const USER_EMAIL: &str = "user_email";
    pub const USER_NAME: &str = "user_name";
    pub const USER_PHONE: &str = "user_phone";
}

/// Snapshot of the logged-in user's tokens and profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
}

/// Token store over a platform storage backend.
///
/// No operation surfaces an error: a missing value reads as `None`, and
/// storage I/O failures are logged and swallowed so a flaky disk never
/// breaks an API call in flight.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn SessionStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub async fn save_access_token(&self, token: &str) {
        self.set(keys::ACCESS_TOKEN, token).await;
    }

    pub async fn access_token(&self) -> Option<String> {
        self.get(keys::ACCESS_TOKEN).await
    }

    pub async fn save_refresh_token(&self, token: &str) {
        self.set(keys::REFRESH_TOKEN, token).await;
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.get(keys::REFRESH_TOKEN).await
    }

    pub async fn save_user(&self, id: &str, email: &str, name: &str, phone: Option<&str>) {
        self.set(keys::USER_ID, id).await;
        self.set(keys::USER_EMAIL, email).await;
        self.set(keys::USER_NAME, name).await;
        match phone {
            Some(phone) => self.set(keys::USER_PHONE, phone).await,
            None => self.remove(keys::USER_PHONE).await,
        }
    }

    pub async fn user_id(&self) -> Option<String> {
        self.get(keys::USER_ID).await
    }

    pub async fn user_email(&self) -> Option<String> {
        self.get(keys::USER_EMAIL).await
    }

    pub async fn user_name(&self) -> Option<String> {
        self.get(keys::USER_NAME).await
    }

    pub async fn user_phone(&self) -> Option<String> {
        self.get(keys::USER_PHONE).await
    }

    /// A user is logged in exactly when an access token is present.
    pub async fn is_logged_in(&self) -> bool {
        self.access_token().await.is_some()
    }

    /// Remove every persisted session field.
    pub async fn clear(&self) {
        if let Err(e) = self.storage.clear().await {
            tracing::warn!("failed to clear session storage: {}", e);
        }
    }

    pub async fn session(&self) -> Session {
        Session {
            access_token: self.access_token().await,
            refresh_token: self.refresh_token().await,
            user_id: self.user_id().await,
            user_email: self.user_email().await,
            user_name: self.user_name().await,
            user_phone: self.user_phone().await,
        }
    }

    pub async fn save_session(&self, session: &Session) {
        if let Some(v) = &session.access_token {
            self.save_access_token(v).await;
        }
        if let Some(v) = &session.refresh_token {
            self.save_refresh_token(v).await;
        }
        if let (Some(id), Some(email), Some(name)) = (
            &session.user_id,
            &session.user_email,
            &session.user_name,
        ) {
            self.save_user(id, email, name, session.user_phone.as_deref())
                .await;
        }
    }

    async fn get(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("failed to read {} from session storage: {}", key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value).await {
            tracing::warn!("failed to write {} to session storage: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove(key).await {
            tracing::warn!("failed to remove {} from session storage: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TokenStore {
        TokenStore::new(Arc::new(MemorySessionStorage::new()))
    }

    #[tokio::test]
    async fn test_login_logout_scenario() {
        let tokens = store();
        assert!(!tokens.is_logged_in().await);

        tokens.save_access_token("T1").await;
        assert_eq!(tokens.access_token().await.as_deref(), Some("T1"));
        assert!(tokens.is_logged_in().await);

        tokens.clear().await;
        assert!(!tokens.is_logged_in().await);
        assert_eq!(tokens.access_token().await, None);
        assert_eq!(tokens.refresh_token().await, None);
        assert_eq!(tokens.user_id().await, None);
    }

    #[tokio::test]
    async fn test_save_user_without_phone_removes_it() {
        let tokens = store();
        tokens
            .save_user("u1", "a@b.c", "Ann", Some("+100000000"))
            .await;
        assert_eq!(tokens.user_phone().await.as_deref(), Some("+100000000"));

        tokens.save_user("u1", "a@b.c", "Ann", None).await;
        assert_eq!(tokens.user_phone().await, None);
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let tokens = store();
        let session = Session {
            access_token: Some("acc".into()),
            refresh_token: Some("ref".into()),
            user_id: Some("u1".into()),
            user_email: Some("a@b.c".into()),
            user_name: Some("Ann".into()),
            user_phone: Some("+100000000".into()),
        };

        tokens.save_session(&session).await;
        assert_eq!(tokens.session().await, session);
    }
}
