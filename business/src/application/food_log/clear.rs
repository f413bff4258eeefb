use async_trait::async_trait;

use crate::application::food_log::store::FoodLogStore;
use crate::domain::food_log::errors::FoodLogError;
use crate::domain::food_log::use_cases::clear::ClearFoodLogUseCase;

#[async_trait]
impl ClearFoodLogUseCase for FoodLogStore {
    async fn execute(&self) -> Result<(), FoodLogError> {
        self.logger.info("Clearing food log");

        let _guard = self.write_lock.lock().await;
        self.persist_log(Vec::new()).await?;

        self.logger.info("Food log cleared");
        Ok(())
    }
}
