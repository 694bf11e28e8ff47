//! pogor.dev site API library
//!
//! Modules:
//! - `api`: Axum router, shared state and handlers used by the binary.
//! - `giscus`: Comment widget settings and embed helpers.
//! - `og`: Open Graph image generators behind one trait.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `GiscusConfig`,
//! `GISCUS`, and `OgImageGenerator`.
pub mod api;
pub mod config;
pub mod error;
pub mod giscus;
pub mod og;

pub use config::Config;
pub use giscus::{giscus, GiscusConfig, GISCUS};
pub use og::OgImageGenerator;
