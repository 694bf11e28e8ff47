//! Router construction and shared application state.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::error::{AppError, AppResult};
use crate::giscus::GiscusConfig;
use crate::og::OgImageGenerator;

pub const ROOT_ROUTE: &str = "/";
pub const GISCUS_ROUTE: &str = "/giscus.json";

pub struct AppState {
    pub og_generator: Arc<dyn OgImageGenerator>,
    pub giscus: &'static GiscusConfig,
}

/// Build the application router. `og_route` is where the preview image is served.
pub fn router(state: Arc<AppState>, og_route: &str) -> AppResult<Router> {
    check_og_route(og_route)?;

    Ok(Router::new()
        .route(ROOT_ROUTE, get(handlers::root))
        .route(og_route, get(handlers::og_image))
        .route(GISCUS_ROUTE, get(handlers::giscus_config))
        .layer(CorsLayer::permissive())
        .with_state(state))
}

/// The OG path must be a literal path that no other route already uses.
pub fn check_og_route(og_route: &str) -> AppResult<()> {
    if !og_route.starts_with('/') {
        return Err(AppError::Config(format!("OG_ROUTE '{}' must start with '/'", og_route)));
    }
    if og_route == ROOT_ROUTE || og_route == GISCUS_ROUTE {
        return Err(AppError::Config(format!("OG_ROUTE '{}' is already served", og_route)));
    }
    if og_route.contains(':') || og_route.contains('*') {
        return Err(AppError::Config(format!(
            "OG_ROUTE '{}' must not contain path captures (':' or '*')",
            og_route
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::og::CardRenderer;

    fn state() -> Arc<AppState> {
        let renderer = CardRenderer::from_config(&Config::from_lookup(|_| None)).unwrap();
        Arc::new(AppState {
            og_generator: Arc::new(renderer),
            giscus: crate::giscus::giscus(),
        })
    }

    fn rejected(og_route: &str) -> bool {
        matches!(router(state(), og_route), Err(AppError::Config(_)))
    }

    #[test]
    fn empty_route_collides_with_root() {
        let cfg = Config::from_lookup(|key| (key == "OG_ROUTE").then(String::new));
        assert_eq!(cfg.og_route, "/");
        assert!(rejected(&cfg.og_route));
    }

    #[test]
    fn giscus_route_is_reserved() {
        assert!(rejected("/giscus.json"));
    }

    #[test]
    fn captures_are_rejected() {
        assert!(rejected("/:name.png"));
        assert!(rejected("/og/*rest"));
    }

    #[test]
    fn relative_route_is_rejected() {
        assert!(rejected("og.png"));
    }

    #[test]
    fn literal_routes_build() {
        assert!(router(state(), "/og.png").is_ok());
        assert!(router(state(), "/social/card.png").is_ok());
    }
}
