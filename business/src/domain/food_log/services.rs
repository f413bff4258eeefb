use async_trait::async_trait;

use super::errors::NutritionLookupError;
use super::model::FoodRecord;

/// Outcome of one nutrition lookup. Never persisted.
pub type NutritionQueryResult = Result<Vec<FoodRecord>, NutritionLookupError>;

/// Service port for looking up nutrition facts by food name.
///
/// Any 2xx answer is a success, including one with no matches.
#[async_trait]
pub trait NutritionLookupService: Send + Sync {
    async fn fetch(&self, query: &str) -> NutritionQueryResult;
}
