use std::time::Duration;

use serde::Deserialize;

use crate::types::{map_reqwest_error, ApiError};
use viewer_core::{FeedQuery, FeedRecord};

/// Connection settings for the archive backend.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the backend, e.g. `http://127.0.0.1:8888`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8888".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches one page of feeds for the given query. An empty vector
    /// is a successful result, not an error.
    async fn fetch_feeds(&self, query: &FeedQuery) -> Result<Vec<FeedRecord>, ApiError>;
}

/// The listing endpoint wraps its array in an object; `feeds` may be
/// absent entirely when nothing matched.
#[derive(Debug, Deserialize)]
struct FeedsResponse {
    #[serde(default)]
    feeds: Option<Vec<FeedRecord>>,
}

#[derive(Debug, Clone)]
pub struct RestFeedSource {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl RestFeedSource {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn feeds_url(&self) -> String {
        format!("{}/a/feeds", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl FeedSource for RestFeedSource {
    async fn fetch_feeds(&self, query: &FeedQuery) -> Result<Vec<FeedRecord>, ApiError> {
        let response = self
            .client
            .get(self.feeds_url())
            .query(&query_params(query))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        let decoded: FeedsResponse =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(decoded.feeds.unwrap_or_default())
    }
}

/// Wire parameters for the listing endpoint. Absent optional fields
/// are omitted entirely; `page` stays 0-based at this boundary (the
/// 1-based form exists only in the URL fragment).
fn query_params(query: &FeedQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(user_name) = &query.user_name {
        params.push(("user_name", user_name.clone()));
    }
    if let Some(keyword) = &query.keyword {
        params.push(("keyword", keyword.clone()));
    }
    if query.has_media_only {
        params.push(("has_media_only", "true".to_string()));
    }
    if let Some(since) = &query.since {
        params.push(("since", since.clone()));
    }
    if let Some(until) = &query.until {
        params.push(("until", until.clone()));
    }
    params.push(("page", query.page.to_string()));
    if let Some(count) = query.count {
        params.push(("count", count.to_string()));
    }
    params
}
