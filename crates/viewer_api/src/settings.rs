use serde::Deserialize;

use crate::client::ClientSettings;
use crate::types::{map_reqwest_error, ApiError};

/// Scanner and storage status reported by `GET /a/state`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerStatus {
    pub data_dir: String,
    pub bind_address: String,
    pub time_offset: f32,
    pub is_scanning: bool,
    pub scanner_count: i32,
    pub scanner_count_limit: i32,
}

/// Thin client for the settings collaborator. These actions sit next
/// to the browsing session but are not part of its state machine: each
/// one is a fire-and-forget POST with 2xx/non-2xx semantics.
#[derive(Debug, Clone)]
pub struct SettingsClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl SettingsClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub async fn status(&self) -> Result<ServerStatus, ApiError> {
        let response = self
            .client
            .get(self.url("/a/state"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn set_data_dir(&self, data_dir: &str) -> Result<(), ApiError> {
        self.post_form("/a/set_data_dir", &[("data_dir", data_dir)])
            .await
    }

    pub async fn scan(&self) -> Result<(), ApiError> {
        self.post_form::<&str>("/a/scan", &[]).await
    }

    pub async fn generate_thumbnails(&self) -> Result<(), ApiError> {
        self.post_form::<&str>("/a/generate_thumbnails", &[]).await
    }

    pub async fn clean(&self) -> Result<(), ApiError> {
        self.post_form::<&str>("/a/clean", &[]).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    async fn post_form<V: serde::Serialize>(
        &self,
        path: &str,
        fields: &[(&str, V)],
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
