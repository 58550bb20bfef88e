use axum::{Router, routing::get};
use yomu_api::{config::ApiConfig, state::ApiState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: sqlx::PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    // Load configuration from Shuttle secrets
    let config = ApiConfig::from_shuttle_secrets(&secrets)
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    // Shuttle installs its own tracing subscriber, so ours is skipped
    let metrics_handle = yomu_api::metrics::init_metrics()?;

    // The Shuttle-provided database replaces DATABASE_URL/DATABASE_ACCESS_KEY
    yomu_db::run_migrations(&pool).await?;
    let state = ApiState::new(&config, Some(pool))?;

    let metrics_app = Router::new()
        .route("/metrics", get(yomu_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = yomu_api::router::router().with_state(state).merge(metrics_app);
    let app = yomu_api::middleware::apply_http_layers(app, &config.parsed_allowed_origins());

    tracing::info!(environment = ?config.env, "Shuttle service configured");

    Ok(app.into())
}
