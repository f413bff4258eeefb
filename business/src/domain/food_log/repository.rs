use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{FoodRecord, SuggestionHistory};

/// Durable mirror of the food log and the suggestion history.
///
/// Reads return an empty value when nothing has been stored yet. Each save
/// replaces the whole stored value atomically.
#[async_trait]
pub trait FoodLogRepository: Send + Sync {
    async fn load_log(&self) -> Result<Vec<FoodRecord>, RepositoryError>;
    async fn save_log(&self, log: &[FoodRecord]) -> Result<(), RepositoryError>;
    async fn load_suggestions(&self) -> Result<SuggestionHistory, RepositoryError>;
    async fn save_suggestions(&self, suggestions: &SuggestionHistory)
    -> Result<(), RepositoryError>;
}
