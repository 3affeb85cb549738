use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

use super::models::ApiError;
use crate::error::SearchError;
use crate::request_id::{REQUEST_ID_HEADER, RequestId};

/// Mints a `RequestId`, makes it available to inner layers and handlers as a
/// request extension, and echoes it back in `X-Request-Id`.
pub async fn assign_request_id(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::new();
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

/// Turns a panic anywhere below this layer into the generic internal error
/// body instead of dropping the connection. Must sit inside
/// `assign_request_id`.
pub async fn recover_panic(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .copied()
        .unwrap_or_default();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let cause = anyhow::anyhow!("PANIC: {}", panic_message(panic.as_ref()));
            ApiError::new(request_id, SearchError::Internal(cause)).into_response()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}
