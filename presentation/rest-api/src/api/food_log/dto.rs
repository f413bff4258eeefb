use poem_openapi::Object;

use business::domain::food_log::model::FoodRecord;
use business::domain::food_log::summary::DailySummary;

#[derive(Debug, Clone, Object)]
pub struct SearchFoodRequest {
    /// Free-text food description, e.g. "1 apple and 100g rice"
    pub query: String,
}

#[derive(Debug, Clone, Object)]
pub struct FoodRecordResponse {
    /// Record identifier, used for deletion
    pub id: String,
    /// Matched food name
    pub name: String,
    /// Energy in kcal
    pub calories: f64,
    /// Serving size the quantities refer to
    pub serving_size_g: f64,
    pub fat_total_g: f64,
    pub protein_g: f64,
    pub carbohydrates_total_g: f64,
}

impl From<FoodRecord> for FoodRecordResponse {
    fn from(record: FoodRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
            calories: record.calories,
            serving_size_g: record.serving_size_g,
            fat_total_g: record.fat_total_g,
            protein_g: record.protein_g,
            carbohydrates_total_g: record.carbohydrates_total_g,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DailySummaryResponse {
    /// Calories consumed across the log
    pub calories: f64,
    pub protein_g: f64,
    pub carbohydrates_g: f64,
    pub fat_g: f64,
    /// Number of log entries
    pub entries: u64,
    pub calorie_budget: f64,
    pub protein_goal_g: f64,
    pub carbohydrates_goal_g: f64,
    pub fat_goal_g: f64,
    /// Budget minus consumed; negative when over budget
    pub remaining_calories: f64,
    pub over_budget: bool,
}

impl From<DailySummary> for DailySummaryResponse {
    fn from(summary: DailySummary) -> Self {
        Self {
            calories: summary.calories,
            protein_g: summary.protein_g,
            carbohydrates_g: summary.carbohydrates_g,
            fat_g: summary.fat_g,
            entries: summary.entries as u64,
            calorie_budget: summary.budget.calories,
            protein_goal_g: summary.budget.protein_g,
            carbohydrates_goal_g: summary.budget.carbohydrates_g,
            fat_goal_g: summary.budget.fat_g,
            remaining_calories: summary.remaining_calories(),
            over_budget: summary.is_over_budget(),
        }
    }
}
