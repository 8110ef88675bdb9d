//! API-key middleware
//!
//! Every `/api` route requires the `X-API-Key` header to equal the
//! configured key. Rejection happens before any handler or store access.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use super::server::AppState;
use crate::config::API_KEY_HEADER;

pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rejection = match req.headers().get(API_KEY_HEADER) {
        Some(value) if state.api_key.matches(value.as_bytes()) => None,
        Some(_) => Some("wrong key"),
        None => Some("missing key"),
    };

    if let Some(reason) = rejection {
        tracing::warn!(uri = %req.uri(), reason, "API key rejected");
        return Err(ApiError::InvalidApiKey);
    }

    Ok(next.run(req).await)
}
