use crate::api::AuthApi;
use crate::dto::{LoginRequest, UserProfile};
use crate::repository::ApiResult;
use sitelink_http::TokenStore;

/// Login/logout flows. This is the one repository with a side effect beyond
/// its API call: it owns the session mutation on login and logout.
#[derive(Clone)]
pub struct AuthRepository {
    api: AuthApi,
    tokens: TokenStore,
}

impl AuthRepository {
    pub fn new(api: AuthApi, tokens: TokenStore) -> Self {
        Self { api, tokens }
    }

    /// Authenticate and persist the returned session.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<UserProfile> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&request).await {
            Ok(response) => {
                self.tokens.save_access_token(&response.access_token).await;
                self.tokens
                    .save_refresh_token(&response.refresh_token)
                    .await;
                let user = response.user;
                self.tokens
                    .save_user(&user.id, &user.email, &user.name, user.phone.as_deref())
                    .await;
                tracing::info!("logged in as {}", user.email);
                ApiResult::Success(user)
            }
            Err(err) => Err::<UserProfile, _>(err).into(),
        }
    }

    /// Clear the local session. The server-side logout is best-effort: a
    /// dead network must not trap the user in a logged-in state.
    pub async fn logout(&self) -> ApiResult<()> {
        if let Err(err) = self.api.logout().await {
            tracing::warn!("server-side logout failed: {}", err);
        }
        self.tokens.clear().await;
        ApiResult::Success(())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.tokens.is_logged_in().await
    }
}
