use std::env;

use business::domain::food_log::summary::DailyBudget;

/// Daily calorie and macro targets
///
/// Environment variables (defaults from `DailyBudget::default`):
/// - DAILY_CALORIE_BUDGET: kcal per day (1750)
/// - DAILY_PROTEIN_GOAL_G: grams of protein (170)
/// - DAILY_CARBS_GOAL_G: grams of carbohydrates (170)
/// - DAILY_FAT_GOAL_G: grams of fat (65)
pub struct BudgetConfig {
    pub budget: DailyBudget,
}

impl BudgetConfig {
    pub fn from_env() -> Self {
        let defaults = DailyBudget::default();
        Self {
            budget: DailyBudget {
                calories: read_target("DAILY_CALORIE_BUDGET", defaults.calories),
                protein_g: read_target("DAILY_PROTEIN_GOAL_G", defaults.protein_g),
                carbohydrates_g: read_target("DAILY_CARBS_GOAL_G", defaults.carbohydrates_g),
                fat_g: read_target("DAILY_FAT_GOAL_G", defaults.fat_g),
            },
        }
    }
}

fn read_target(name: &str, default: f64) -> f64 {
    parse_target(env::var(name).ok().as_deref()).unwrap_or(default)
}

/// Accepts only finite, positive targets.
fn parse_target(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
