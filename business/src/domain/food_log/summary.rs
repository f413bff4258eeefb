use super::model::FoodRecord;

const DEFAULT_CALORIES: f64 = 1750.0;
const DEFAULT_PROTEIN_G: f64 = 170.0;
const DEFAULT_CARBOHYDRATES_G: f64 = 170.0;
const DEFAULT_FAT_G: f64 = 65.0;

/// Daily calorie and macro targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBudget {
    pub calories: f64,
    pub protein_g: f64,
    pub carbohydrates_g: f64,
    pub fat_g: f64,
}

impl Default for DailyBudget {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES,
            protein_g: DEFAULT_PROTEIN_G,
            carbohydrates_g: DEFAULT_CARBOHYDRATES_G,
            fat_g: DEFAULT_FAT_G,
        }
    }
}

/// Aggregate intake of the food log measured against a budget.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub calories: f64,
    pub protein_g: f64,
    pub carbohydrates_g: f64,
    pub fat_g: f64,
    pub entries: usize,
    pub budget: DailyBudget,
}

impl DailySummary {
    /// Sums every entry of the log.
    pub fn from_log(log: &[FoodRecord], budget: DailyBudget) -> Self {
        let mut summary = Self {
            calories: 0.0,
            protein_g: 0.0,
            carbohydrates_g: 0.0,
            fat_g: 0.0,
            entries: log.len(),
            budget,
        };

        for record in log {
            summary.calories += record.calories;
            summary.protein_g += record.protein_g;
            summary.carbohydrates_g += record.carbohydrates_total_g;
            summary.fat_g += record.fat_total_g;
        }

        summary
    }

    /// Calories left for the day. Negative once the budget is exceeded.
    pub fn remaining_calories(&self) -> f64 {
        self.budget.calories - self.calories
    }

    pub fn is_over_budget(&self) -> bool {
        self.calories > self.budget.calories
    }
}
