use tokio::sync::watch;

use crate::domain::food_log::model::FoodRecord;

/// Subscribes to the persisted food log. The receiver starts at the latest value.
pub trait LoadFoodLogUseCase: Send + Sync {
    fn execute(&self) -> watch::Receiver<Vec<FoodRecord>>;
}
