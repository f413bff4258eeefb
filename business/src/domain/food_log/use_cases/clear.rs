use async_trait::async_trait;

use crate::domain::food_log::errors::FoodLogError;

#[async_trait]
pub trait ClearFoodLogUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), FoodLogError>;
}
