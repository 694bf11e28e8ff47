//! Fetches a pre-rendered OG image from another service.
//!
//! Useful when the card is produced by a separate renderer (a headless
//! browser, an image CDN): the bytes are passed through untouched.
use axum::async_trait;
use reqwest::Client;

use crate::error::{AppError, AppResult};
use crate::og::OgImageGenerator;

#[derive(Clone)]
pub struct UpstreamGenerator {
    client: Client,
    url: String,
}

impl UpstreamGenerator {
    pub fn new(url: String) -> Self {
        UpstreamGenerator { client: Client::new(), url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch image bytes from the configured URL.
    pub async fn fetch(&self) -> AppResult<Vec<u8>> {
        tracing::info!("Fetching OG image from {}", self.url);
        let response = self.client.get(&self.url)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            response.bytes().await.map(|b| b.to_vec()).map_err(AppError::HttpClient)
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            Err(AppError::Upstream(format!(
                "Failed to fetch OG image. Status: {}, Body: {}",
                status, body
            )))
        }
    }
}

#[async_trait]
impl OgImageGenerator for UpstreamGenerator {
    async fn generate(&self) -> AppResult<Vec<u8>> {
        self.fetch().await
    }
}
