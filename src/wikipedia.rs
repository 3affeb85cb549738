use anyhow::Context;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::Config;
use crate::data_models::WikipediaResponse;
use crate::error::SearchError;

/// Thin client for the MediaWiki action API. Cloning is cheap; the underlying
/// `reqwest::Client` is a shared connection pool.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
}

impl WikipediaClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client for the wikipedia API")?;

        Ok(WikipediaClient {
            http,
            api_url: api_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.wikipedia_api_url.clone(), config.upstream_timeout())
    }

    /// Query parameters in the order MediaWiki documents them. `titles` is
    /// percent-encoded by reqwest.
    pub fn revision_query(title: &str) -> [(&'static str, &str); 7] {
        [
            ("action", "query"),
            ("prop", "revisions"),
            ("titles", title),
            ("rvlimit", "1"),
            ("formatversion", "2"),
            ("format", "json"),
            ("rvprop", "content"),
        ]
    }

    /// Issues exactly one GET for the latest revision of `title`.
    pub async fn fetch_latest_revision(&self, title: &str) -> Result<WikipediaResponse, SearchError> {
        let request = self
            .http
            .get(&self.api_url)
            .query(&Self::revision_query(title))
            .build()
            .with_context(|| format!("Failed to build wikipedia API request for '{title}'"))?;

        tracing::debug!(url = %request.url(), "requesting latest revision");

        let response = self.http.execute(request).await.map_err(|e| {
            let what = if e.is_timeout() {
                "Timed out waiting for the wikipedia API"
            } else {
                "Failed to reach the wikipedia API"
            };
            anyhow::Error::new(e).context(what)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SearchError::Upstream(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .context("Failed to read wikipedia API response body")?;

        let decoded = serde_json::from_str::<WikipediaResponse>(&body)
            .context("Failed to decode wikipedia API response")?;

        Ok(decoded)
    }
}
