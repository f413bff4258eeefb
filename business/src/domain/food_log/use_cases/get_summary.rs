use crate::domain::food_log::summary::DailySummary;

pub trait GetDailySummaryUseCase: Send + Sync {
    fn execute(&self) -> DailySummary;
}
