use axum::{
    Extension, Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa::openapi::{OpenApi as OpenApiDoc, Server};

use super::models::{
    ApiError, ErrorResponse, HealthResponse, HttpError, NoDescriptionResponse, SearchParams,
    ShortDescriptionData, SuccessResponse,
};
use crate::request_id::RequestId;
use crate::search::SearchHandler;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchHandler>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "shortdesc",
        description = "Get the short description of a given Wikipedia article."
    ),
    paths(health_handler, search_handler),
    components(schemas(
        HealthResponse,
        SuccessResponse,
        ShortDescriptionData,
        NoDescriptionResponse,
        ErrorResponse,
        HttpError
    )),
    tags((name = "search", description = "Wikipedia short descriptions"))
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "search",
    responses((status = 200, description = "The API is operational", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "operational".to_string(),
    })
}

/// Returns the short description of a person, place or thing.
///
/// A 200 carries either `data.short_description` or a `message` with
/// `missing` telling apart "no such article" from "article without a short
/// description".
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Short description, or a message saying why there is none", body = SuccessResponse),
        (status = 400, description = "Query parameter missing or empty", body = ErrorResponse),
        (status = 500, description = "Wikipedia API or internal error", body = ErrorResponse),
    )
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = SearchParams::from_pairs(pairs).query.unwrap_or_default();

    let result = state
        .search
        .handle(&request_id, &query)
        .await
        .map_err(|e| ApiError::new(request_id, e))?;

    Ok(result.into_response())
}

/// The OpenAPI document with its server entry pointing at `base_path`.
pub fn api_doc(base_path: &str) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    let base = if base_path.is_empty() { "/" } else { base_path };
    doc.servers = Some(vec![Server::new(base)]);
    doc
}
