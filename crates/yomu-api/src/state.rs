use std::time::Duration;

use sqlx::PgPool;
use yomu_llm::LlmClient;

use crate::{ApiConfig, config::Environment, error::ApiError};

/// Shared handler state
///
/// Every external client is constructed once by the binary and injected here.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub llm: LlmClient,
    /// `None` when database credentials are missing
    pub pool: Option<PgPool>,
    pub environment: Environment,
    pub free_daily_generation_limit: Option<u32>,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: Option<PgPool>) -> anyhow::Result<Self> {
        if config.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY not set, model requests will be unauthenticated");
        }

        let llm = LlmClient::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
            Duration::from_secs(config.model_timeout_secs),
        )?;

        Ok(Self {
            llm,
            pool,
            environment: config.env,
            free_daily_generation_limit: config.free_daily_generation_limit,
        })
    }

    /// The database pool, or the configuration error surfaced to callers.
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.pool.as_ref().ok_or(ApiError::PersistenceUnavailable)
    }
}

/// Connect to the database and run migrations when credentials are configured.
///
/// Missing credentials are not fatal: a warning is logged and persistence is
/// disabled.
pub async fn connect_database(config: &ApiConfig) -> anyhow::Result<Option<PgPool>> {
    let Some((url, access_key)) = config.database_credentials() else {
        tracing::warn!(
            "Database credentials not found in environment variables, persistence disabled"
        );
        return Ok(None);
    };

    let pool = yomu_db::create_pool(url, access_key, config.database_max_connections).await?;
    yomu_db::run_migrations(&pool).await?;
    tracing::info!("Database connected and migrations applied");

    Ok(Some(pool))
}
