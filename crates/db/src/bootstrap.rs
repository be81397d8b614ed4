//! Connection and schema bootstrap, run once at process start

use anyhow::Context;
use recordshop_common::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool};

/// Migrations embedded from the workspace `migrations/` directory
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Connection options for `config`; the password never appears in a URL or log line.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

/// Open the shared connection pool
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPool::connect_with(connect_options(config))
        .await
        .with_context(|| {
            format!(
                "failed to connect to database {} at {}:{}",
                config.name, config.host, config.port
            )
        })?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Database connection established"
    );
    Ok(pool)
}

/// Apply pending schema migrations
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("failed to apply database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
