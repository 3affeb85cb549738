use anyhow::anyhow;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::SearchError;
use crate::extract::extract_short_description;
use crate::request_id::RequestId;
use crate::wikipedia::WikipediaClient;

/// Outcome of a search that reached MediaWiki and got a usable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Found { short_description: String },
    ArticleMissing,
    NoDescriptionFound,
}

/// Validates a query, fetches the article's latest revision and pulls the
/// short description out of its wikitext.
#[derive(Debug, Clone)]
pub struct SearchHandler {
    client: WikipediaClient,
}

impl SearchHandler {
    pub fn new(client: WikipediaClient) -> Self {
        SearchHandler { client }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(WikipediaClient::from_config(config)?))
    }

    pub async fn handle(&self, request_id: &RequestId, query: &str) -> Result<SearchResult, SearchError> {
        let title = query.trim();
        if title.is_empty() {
            return Err(SearchError::missing_query());
        }

        debug!(%request_id, title, "searching wikipedia");
        let response = self.client.fetch_latest_revision(title).await?;

        // MediaWiki always answers a non-empty `titles` with one page entry.
        let page = response
            .query
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("wikipedia API returned no pages for '{title}'"))?;

        if !page.exists() {
            debug!(
                %request_id,
                title = %page.title,
                invalid_reason = page.invalid_reason.as_deref().unwrap_or(""),
                "article not found"
            );
            return Ok(SearchResult::ArticleMissing);
        }

        let revision = page
            .latest_revision()
            .ok_or_else(|| anyhow!("wikipedia page '{}' came back without a revision", page.title))?;

        let result = match extract_short_description(&revision.content) {
            Some(description) => SearchResult::Found {
                short_description: description.to_string(),
            },
            None => SearchResult::NoDescriptionFound,
        };

        let found = matches!(result, SearchResult::Found { .. });
        info!(%request_id, title = %page.title, found, "search complete");
        Ok(result)
    }
}
