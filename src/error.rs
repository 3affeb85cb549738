use thiserror::Error;

pub const QUERY_REQUIRED: &str = "Query parameter is required.";

/// Ways a search can fail. "Article missing" and "no description" are not
/// errors; they are `SearchResult` variants.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The caller sent something unusable.
    #[error("{0}")]
    Validation(String),

    /// MediaWiki answered with a status other than 200.
    #[error("wikipedia api responded with http code {0}")]
    Upstream(u16),

    /// Transport failures, malformed payloads and anything else the caller
    /// cannot act on. The chain is logged, never returned.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SearchError {
    pub fn missing_query() -> Self {
        SearchError::Validation(QUERY_REQUIRED.to_string())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Validation(_) => "validation",
            SearchError::Upstream(_) => "upstream",
            SearchError::Internal(_) => "internal",
        }
    }
}
