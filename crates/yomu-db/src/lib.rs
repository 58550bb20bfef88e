pub mod models;
pub mod repositories;

use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Build connect options from the database endpoint URL and its access key.
///
/// The access key is applied as the connection password, overriding any
/// password embedded in the URL.
pub fn connect_options(database_url: &str, access_key: &str) -> anyhow::Result<PgConnectOptions> {
    let options = PgConnectOptions::from_str(database_url)
        .context("invalid database URL")?
        .password(access_key);

    Ok(options)
}

/// Create a PostgreSQL connection pool.
pub async fn create_pool(
    database_url: &str,
    access_key: &str,
    max_connections: u32,
) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url, access_key)?)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Run the migrations in this crate's `migrations/` folder.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    Ok(())
}

/// Round-trip a trivial query, used by readiness probes.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_key_is_applied_as_password() {
        let options =
            connect_options("postgres://postgres@db.example.com:5432/postgres", "secret").unwrap();

        assert_eq!(options.get_host(), "db.example.com");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("postgres"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(connect_options("not a url", "secret").is_err());
    }
}
