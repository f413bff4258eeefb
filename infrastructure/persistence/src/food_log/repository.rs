use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::food_log::model::{FoodRecord, SuggestionHistory};
use business::domain::food_log::repository::FoodLogRepository;

use super::entity::{
    PreferenceEntity, decode_log, decode_suggestions, encode_log, encode_suggestions,
};

pub const FOODS_KEY: &str = "foods";
pub const SUGGESTIONS_KEY: &str = "suggestions";

/// Food log storage on a SQLite key-value table, one row per key.
pub struct FoodLogRepositorySqlite {
    pool: SqlitePool,
}

impl FoodLogRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn read_value(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, PreferenceEntity>(
            "SELECT key, value, updated_at FROM preferences WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to read '{}': {}", key, err);
            RepositoryError::DatabaseError
        })?;

        Ok(entity.map(|e| e.value))
    }

    async fn write_value(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO preferences (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to write '{}': {}", key, err);
            RepositoryError::Persistence
        })?;

        Ok(())
    }
}

#[async_trait]
impl FoodLogRepository for FoodLogRepositorySqlite {
    async fn load_log(&self) -> Result<Vec<FoodRecord>, RepositoryError> {
        match self.read_value(FOODS_KEY).await? {
            Some(value) => decode_log(&value),
            None => Ok(Vec::new()),
        }
    }

    async fn save_log(&self, log: &[FoodRecord]) -> Result<(), RepositoryError> {
        let value = encode_log(log)?;
        self.write_value(FOODS_KEY, value).await
    }

    async fn load_suggestions(&self) -> Result<SuggestionHistory, RepositoryError> {
        match self.read_value(SUGGESTIONS_KEY).await? {
            Some(value) => decode_suggestions(&value),
            None => Ok(SuggestionHistory::new()),
        }
    }

    async fn save_suggestions(
        &self,
        suggestions: &SuggestionHistory,
    ) -> Result<(), RepositoryError> {
        let value = encode_suggestions(suggestions)?;
        self.write_value(SUGGESTIONS_KEY, value).await
    }
}
