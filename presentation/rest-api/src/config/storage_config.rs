use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://calories.db";

/// Local storage configuration
pub struct StorageConfig {
    pub database_url: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - FOOD_LOG_DATABASE_URL: SQLite connection string (default: "sqlite://calories.db")
    pub fn from_env() -> Self {
        let database_url =
            env::var("FOOD_LOG_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self { database_url }
    }

    /// Opens the database and applies pending migrations
    pub async fn init_database(&self) -> anyhow::Result<SqlitePool> {
        let pool = create_sqlite_pool(&DatabaseConfig::new(self.database_url.clone())).await?;
        run_migrations(&pool).await?;
        Ok(pool)
    }
}
