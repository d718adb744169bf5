use std::time::Duration;

use log::{debug, error};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::SessionStore;
use crate::config::AppConfig;
use crate::error::{ApiError, NetworkError};

const FALLBACK_REJECTION: &str = "Something went wrong, please try again.";

/// Thin JSON client for the WorkForce REST API.
///
/// Attaches the bearer token from the shared [`SessionStore`] when one is present.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: SessionStore) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                error!("❌ Failed to build HTTP client: {}", e);
                NetworkError::from(e)
            })?;

        Ok(Self::with_client(client, config.api_url.clone(), session))
    }

    pub fn with_client(client: Client, mut base_url: Url, session: SessionStore) -> Self {
        // `Url::join` drops the last segment unless the base ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            client,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| NetworkError::Transport(format!("Invalid endpoint {}: {}", path, e)))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkError> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);
        let request = self.authorize(self.client.get(url));
        Self::send(request).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, NetworkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);
        let request = self
            .authorize(self.client.post(url))
            .header("Content-Type", "application/json")
            .json(body);
        Self::send(request).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, NetworkError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("❌ API responded with {}: {}", status, body);
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| NetworkError::Malformed(e.to_string()))
    }
}

/// Pulls the user-facing message out of an error body (`error` or `detail`).
pub fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["error", "detail"]
                .iter()
                .find_map(|key| json.get(key).and_then(|v| v.as_str()).map(String::from))
        })
        .unwrap_or_else(|| FALLBACK_REJECTION.to_string())
}

impl ApiError {
    /// Server rejections become [`ApiError::Rejected`] with the server's message.
    pub fn from_network(err: NetworkError) -> Self {
        match err {
            NetworkError::Status { body, .. } => ApiError::Rejected(rejection_message(&body)),
            other => ApiError::Network(other),
        }
    }
}
