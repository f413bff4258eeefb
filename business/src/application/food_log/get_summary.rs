use crate::application::food_log::store::FoodLogStore;
use crate::domain::food_log::summary::DailySummary;
use crate::domain::food_log::use_cases::get_summary::GetDailySummaryUseCase;

impl GetDailySummaryUseCase for FoodLogStore {
    fn execute(&self) -> DailySummary {
        DailySummary::from_log(&self.log.borrow(), self.budget)
    }
}
