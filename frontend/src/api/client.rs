use reqwest::{Client, StatusCode};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    /// Client pinned to the API base that `cfg` resolves to for this page.
    pub fn from_config(cfg: &config::RuntimeConfig, origin: Option<&str>) -> Self {
        Self::new_with_base_url(config::resolve_api_base_url(cfg, origin))
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => config::await_api_base_url().await,
        }
    }

    /// Asks the backend who is signed in. Anything but a 200 with a user body
    /// is reported as an error so callers can treat it as signed out.
    pub async fn get_me(&self) -> Result<UserInfo, ApiError> {
        let url = format!("{}/auth/me", self.resolved_base_url().await);
        log::debug!("checking session at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::unauthorized("Not signed in"));
        }
        if !status.is_success() {
            let fallback = format!("Session check failed with status {}", status.as_u16());
            let error: ApiError = response
                .json()
                .await
                .unwrap_or_else(|_| ApiError::unknown(fallback));
            return Err(error);
        }

        response
            .json::<Option<UserInfo>>()
            .await
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))?
            .ok_or_else(|| ApiError::unauthorized("Not signed in"))
    }
}
