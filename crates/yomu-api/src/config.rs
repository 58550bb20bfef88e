use serde::Deserialize;

/// Frontend origins allowed when `ALLOWED_ORIGINS` is not set
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://yomufox.vercel.app";

/// Deployment environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Runtime configuration, read from environment variables of the same name
/// in upper case (`OPENAI_API_KEY`, `DATABASE_URL`, ...).
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    /// Model provider key, requests are sent unauthenticated without it
    pub openai_api_key: Option<String>,
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_model_timeout_secs")]
    pub model_timeout_secs: u64,

    /// Database endpoint, persistence is disabled without it
    pub database_url: Option<String>,
    /// Database access key, persistence is disabled without it
    pub database_access_key: Option<String>,
    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,

    /// Comma-separated CORS allow-list
    pub allowed_origins: Option<String>,

    /// Generations per UTC day for users without a pro subscription
    pub free_daily_generation_limit: Option<u32>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

fn default_openai_base_url() -> String {
    yomu_llm::client::DEFAULT_BASE_URL.to_string()
}

const fn default_model_timeout_secs() -> u64 {
    60
}

const fn default_database_max_connections() -> u32 {
    10
}

/// Variables read from Shuttle secrets
#[cfg(feature = "shuttle")]
const SECRET_KEYS: &[&str] = &[
    "ENV",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "MODEL_TIMEOUT_SECS",
    "DATABASE_URL",
    "DATABASE_ACCESS_KEY",
    "DATABASE_MAX_CONNECTIONS",
    "ALLOWED_ORIGINS",
    "FREE_DAILY_GENERATION_LIMIT",
];

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Build the configuration from Shuttle secrets instead of the process environment.
    #[cfg(feature = "shuttle")]
    pub fn from_shuttle_secrets(
        secrets: &shuttle_runtime::SecretStore,
    ) -> Result<Self, envy::Error> {
        let vars = SECRET_KEYS
            .iter()
            .filter_map(|key| secrets.get(key).map(|value| (key.to_string(), value)));

        envy::from_iter(vars)
    }

    /// Database endpoint and access key, if both are set and non-empty.
    pub fn database_credentials(&self) -> Option<(&str, &str)> {
        let url = self.database_url.as_deref().filter(|s| !s.trim().is_empty())?;
        let key = self
            .database_access_key
            .as_deref()
            .filter(|s| !s.trim().is_empty())?;
        Some((url, key))
    }

    /// Allowed origins without surrounding whitespace or trailing slashes.
    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGINS)
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
