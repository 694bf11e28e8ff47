//! Open Graph image generation.
//!
//! The HTTP route only knows about [`OgImageGenerator`]; which implementation
//! backs it is chosen from `OG_SOURCE`:
//! - `render`: draw the site card locally (`render::CardRenderer`).
//! - `upstream`: fetch a pre-rendered image over HTTP (`upstream::UpstreamGenerator`).
//! - `file`: serve a PNG from disk (`file::FileGenerator`).
use std::sync::Arc;

use axum::async_trait;

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub mod file;
pub mod render;
pub mod upstream;

pub use file::FileGenerator;
pub use render::CardRenderer;
pub use upstream::UpstreamGenerator;

/// Produces the PNG bytes served as the site's preview image.
#[async_trait]
pub trait OgImageGenerator: Send + Sync {
    async fn generate(&self) -> AppResult<Vec<u8>>;
}

/// Build the generator selected by the configuration.
pub fn from_config(config: &Config) -> AppResult<Arc<dyn OgImageGenerator>> {
    let source = source_name(&config.og_source);
    let generator: Arc<dyn OgImageGenerator> = match source.as_str() {
        "render" => Arc::new(CardRenderer::from_config(config)?),
        "upstream" => {
            let url = config.og_upstream_url.clone().ok_or_else(|| {
                AppError::Config("OG_UPSTREAM_URL is required when OG_SOURCE=upstream".to_string())
            })?;
            Arc::new(UpstreamGenerator::new(url))
        }
        "file" => Arc::new(FileGenerator::new(config.og_file_path.clone())),
        other => {
            return Err(AppError::Config(format!(
                "unknown OG_SOURCE '{}', expected render, upstream or file",
                other
            )))
        }
    };
    tracing::info!("OG image source: {}", source);
    Ok(generator)
}

fn source_name(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
