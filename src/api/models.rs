use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

use crate::error::SearchError;
use crate::request_id::RequestId;
use crate::search::SearchResult;

pub const ARTICLE_MISSING_MESSAGE: &str = "No wikipedia article found.";
pub const NO_DESCRIPTION_MESSAGE: &str = "No short description found for this article.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An internal server error occurred. Please contact the service maintainer and provide the request ID.";

pub fn upstream_error_message(status: u16) -> String {
    format!(
        "An error occurred while communicating with the wikipedia API with http code {status}. \
         Please find more information at https://en.wikipedia.org/w/api.php."
    )
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Article title; underscores may stand in for spaces.
    #[param(example = "Yoshua_Bengio")]
    pub query: Option<String>,
}

impl SearchParams {
    /// Picks the first `query` value when the parameter is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        SearchParams {
            query: pairs
                .into_iter()
                .find(|(key, _)| key == "query")
                .map(|(_, value)| value),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "operational")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = "success")]
    pub status: String,
    pub data: ShortDescriptionData,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShortDescriptionData {
    #[schema(example = "Canadian computer scientist")]
    pub short_description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoDescriptionResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "No wikipedia article found.")]
    pub message: String,
    pub missing: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    pub errors: Vec<HttpError>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HttpError {
    #[schema(example = 400)]
    pub code: u16,
    #[schema(example = "f7a4c0c0-5b5e-4b4c-9c1f-1b5c1b5c1b5c")]
    pub request_id: String,
    #[schema(example = "Query parameter is required.")]
    pub detail: String,
}

impl IntoResponse for SearchResult {
    fn into_response(self) -> Response {
        match self {
            SearchResult::Found { short_description } => Json(SuccessResponse {
                status: "success".to_string(),
                data: ShortDescriptionData { short_description },
            })
            .into_response(),
            SearchResult::ArticleMissing => Json(NoDescriptionResponse {
                status: "success".to_string(),
                message: ARTICLE_MISSING_MESSAGE.to_string(),
                missing: true,
            })
            .into_response(),
            SearchResult::NoDescriptionFound => Json(NoDescriptionResponse {
                status: "success".to_string(),
                message: NO_DESCRIPTION_MESSAGE.to_string(),
                missing: false,
            })
            .into_response(),
        }
    }
}

/// A `SearchError` bound to the request it happened in.
#[derive(Debug)]
pub struct ApiError {
    pub request_id: RequestId,
    pub error: SearchError,
}

impl ApiError {
    pub fn new(request_id: RequestId, error: SearchError) -> Self {
        ApiError { request_id, error }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            SearchError::Validation(_) => StatusCode::BAD_REQUEST,
            SearchError::Upstream(_) | SearchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing text. Internal causes never make it in here.
    pub fn detail(&self) -> String {
        match &self.error {
            SearchError::Validation(message) => message.clone(),
            SearchError::Upstream(code) => upstream_error_message(*code),
            SearchError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: "error".to_string(),
            errors: vec![HttpError {
                code: self.status().as_u16(),
                request_id: self.request_id.to_string(),
                detail: self.detail(),
            }],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.error {
            SearchError::Internal(cause) => {
                error!(request_id = %self.request_id, kind = self.error.kind(), "Error: {cause:#}");
            }
            SearchError::Upstream(code) => {
                warn!(request_id = %self.request_id, kind = self.error.kind(), upstream_status = code, "wikipedia API error");
            }
            SearchError::Validation(_) => {}
        }
        (self.status(), Json(self.to_response())).into_response()
    }
}

#[test]
fn test_search_params_from_pairs() {
    let pairs = vec![
        ("lang".to_string(), "en".to_string()),
        ("query".to_string(), "Kim".to_string()),
        ("query".to_string(), "Bob".to_string()),
    ];
    assert_eq!(SearchParams::from_pairs(pairs).query.as_deref(), Some("Kim"));

    assert_eq!(SearchParams::from_pairs(Vec::new()).query, None);
}
