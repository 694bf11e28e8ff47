//! Common error type and result alias.
//!
//! `AppError` doubles as the HTTP error path: handlers return it unchanged
//! and axum turns it into a bare 5xx response via `IntoResponse`.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::HttpClient(_) | AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let status = self.status();
        let reason = status.canonical_reason().unwrap_or("error");
        (status, reason).into_response()
    }
}
