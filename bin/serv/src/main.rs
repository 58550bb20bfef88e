use std::net::SocketAddr;

use axum::{Router, routing::get};
use yomu_api::{
    config::ApiConfig,
    state::{ApiState, connect_database},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    yomu_api::tracing::init_tracing(&config.env);
    let metrics_handle = yomu_api::metrics::init_metrics()?;

    // Persistence is optional: without credentials the server still starts
    let pool = connect_database(&config).await?;
    let state = ApiState::new(&config, pool)?;

    let metrics_app = Router::new()
        .route("/metrics", get(yomu_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = yomu_api::router::router().with_state(state).merge(metrics_app);
    let app = yomu_api::middleware::apply_http_layers(app, &config.parsed_allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Server running");

    // Connect info feeds the per-IP rate limiter when no proxy headers are present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
