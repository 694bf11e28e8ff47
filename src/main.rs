use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pogor_site_api::{api, config, giscus, og};

#[tokio::main]
async fn main() {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();

    let og_generator = og::from_config(&config).expect("Failed to set up OG image generator");
    let state = Arc::new(api::routes::AppState {
        og_generator,
        giscus: giscus::giscus(),
    });

    let app = api::routes::router(state, &config.og_route).expect("Invalid OG_ROUTE");

    let socket_address = config.socket_addr();
    tracing::info!("serving {} on {}", config.og_route, socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
