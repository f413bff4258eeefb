use async_trait::async_trait;

use crate::domain::food_log::errors::FoodLogError;
use crate::domain::food_log::model::FoodRecord;

pub struct SearchFoodParams {
    pub query: String,
}

/// Looks up `query`, appends the matches to the log and records the query
/// as a suggestion. Returns the appended records.
#[async_trait]
pub trait SearchFoodUseCase: Send + Sync {
    async fn execute(&self, params: SearchFoodParams) -> Result<Vec<FoodRecord>, FoodLogError>;
}
