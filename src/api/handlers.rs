//! Axum request handlers for the HTTP API.
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::giscus::GiscusConfig;

pub const PNG: &str = "image/png";

pub async fn root() -> &'static str {
    "pogor.dev site API"
}

/// Serve the Open Graph preview image.
///
/// Generation failures are returned as-is; `AppError`'s response conversion
/// decides the status.
pub async fn og_image(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let png = state.og_generator.generate().await?;
    Ok(([(header::CONTENT_TYPE, PNG)], png))
}

pub async fn giscus_config(State(state): State<Arc<AppState>>) -> Json<&'static GiscusConfig> {
    Json(state.giscus)
}
