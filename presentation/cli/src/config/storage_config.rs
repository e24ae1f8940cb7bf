use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://storefront.db?mode=rwc";

/// Local store location
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_url: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - STOREFRONT_DATABASE_URL: SQLite connection string (default: "sqlite://storefront.db?mode=rwc")
    pub fn from_env() -> Self {
        let database_url = env::var("STOREFRONT_DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self { database_url }
    }
}

/// Opens the local store and brings its schema up to date
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<SqlitePool> {
    let pool = create_sqlite_pool(&DatabaseConfig::new(config.database_url.clone())).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
