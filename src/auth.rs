use std::sync::Arc;

use log::{info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Token and user returned by login/register.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Deserialize, Debug)]
struct AuthResponse {
    #[serde(default)]
    message: Option<String>,
    token: String,
    user: UserInfo,
}

/// In-memory session shared by every API call. Nothing is persisted.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionStore {
    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.inner.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    pub fn set(&self, session: AuthSession) {
        *self.inner.write() = Some(session);
    }

    pub fn clear(&self) -> Option<AuthSession> {
        self.inner.write().take()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate)]
pub struct SignupForm {
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(must_match = "password")]
    pub confirm_password: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// Exchanges credentials for a token and keeps it for later requests.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError> {
        form.validate()?;
        info!("🔐 Logging in {}", form.email);

        let response: AuthResponse = self
            .api
            .post_json("auth/login/", form)
            .await
            .map_err(|e| {
                warn!("❌ Login failed for {}: {}", form.email, e);
                ApiError::from_network(e)
            })?;

        let session = AuthSession {
            token: response.token,
            user: response.user,
        };
        self.session().set(session.clone());
        info!(
            "✅ {}",
            response.message.as_deref().unwrap_or("Login successful")
        );
        Ok(session)
    }

    /// Creates an account. The caller is expected to log in afterwards, so the
    /// returned token is not stored.
    pub async fn register(&self, form: &SignupForm) -> Result<UserInfo, ApiError> {
        form.validate()?;
        info!("📝 Registering {}", form.email);

        let request = RegisterRequest {
            full_name: &form.full_name,
            email: &form.email,
            password: &form.password,
        };
        let response: AuthResponse = self
            .api
            .post_json("auth/register/", &request)
            .await
            .map_err(ApiError::from_network)?;

        info!("✅ Registered user {}", response.user.id);
        Ok(response.user)
    }

    pub fn logout(&self) {
        if let Some(session) = self.session().clear() {
            info!("👋 Logged out user {}", session.user.id);
        }
    }
}
