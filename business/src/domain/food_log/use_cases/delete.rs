use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food_log::errors::FoodLogError;

pub struct DeleteFoodRecordParams {
    pub id: Uuid,
}

/// Removes one record from the log. Returns `false` when no record had that id.
#[async_trait]
pub trait DeleteFoodRecordUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFoodRecordParams) -> Result<bool, FoodLogError>;
}
