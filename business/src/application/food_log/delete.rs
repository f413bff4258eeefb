use async_trait::async_trait;

use crate::application::food_log::store::FoodLogStore;
use crate::domain::food_log::errors::FoodLogError;
use crate::domain::food_log::use_cases::delete::{
    DeleteFoodRecordParams, DeleteFoodRecordUseCase,
};

#[async_trait]
impl DeleteFoodRecordUseCase for FoodLogStore {
    async fn execute(&self, params: DeleteFoodRecordParams) -> Result<bool, FoodLogError> {
        self.logger
            .info(&format!("Deleting food record: {}", params.id));

        let _guard = self.write_lock.lock().await;

        let current = self.log.borrow().clone();
        let next: Vec<_> = current
            .iter()
            .filter(|record| record.id != params.id)
            .cloned()
            .collect();
        let removed = next.len() != current.len();

        // Persisted even when nothing matched.
        self.persist_log(next).await?;

        if removed {
            self.logger
                .info(&format!("Food record deleted: {}", params.id));
        } else {
            self.logger
                .debug(&format!("No food record with id {}", params.id));
        }
        Ok(removed)
    }
}
