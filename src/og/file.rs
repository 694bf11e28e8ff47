//! Serves a PNG that was built ahead of time.
use std::path::PathBuf;

use axum::async_trait;

use crate::error::{AppError, AppResult};
use crate::og::OgImageGenerator;

#[derive(Debug, Clone)]
pub struct FileGenerator {
    path: PathBuf,
}

impl FileGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileGenerator { path: path.into() }
    }
}

#[async_trait]
impl OgImageGenerator for FileGenerator {
    async fn generate(&self) -> AppResult<Vec<u8>> {
        tracing::debug!("Reading OG image from {}", self.path.display());
        tokio::fs::read(&self.path).await.map_err(AppError::Io)
    }
}
