use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::get,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::search::SearchHandler;

pub mod handlers;
pub mod middleware;
pub mod models;

use handlers::AppState;

pub fn create_router(config: &Config, search: Arc<SearchHandler>) -> Router {
    let base_path = config.normalized_base_path();
    let state = AppState { search };

    let mut router = Router::new()
        .route("/", get(handlers::health_handler))
        .route("/health", get(handlers::health_handler))
        .route(&format!("{base_path}/search"), get(handlers::search_handler))
        .merge(
            SwaggerUi::new(format!("{base_path}/docs"))
                .url(format!("{base_path}/openapi.json"), handlers::api_doc(&base_path)),
        );

    if !base_path.is_empty() {
        router = router
            .route(&base_path, get(handlers::health_handler))
            .route(&format!("{base_path}/health"), get(handlers::health_handler));
    }

    router
        .with_state(state)
        .layer(from_fn(middleware::recover_panic))
        .layer(from_fn(middleware::assign_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Result<Vec<HeaderValue>, _> = config
        .cors_origins
        .iter()
        .map(|origin| origin.trim().parse::<HeaderValue>())
        .collect();

    match origins {
        Ok(origins) => cors.allow_origin(origins),
        Err(e) => {
            tracing::warn!("Invalid CORS origins {:?} ({e}), falling back to allow all", config.cors_origins);
            cors.allow_origin(Any)
        }
    }
}
