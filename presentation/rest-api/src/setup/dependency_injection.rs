use std::sync::Arc;

use logger::TracingLogger;
use persistence::food_log::repository::FoodLogRepositorySqlite;

use calorieninjas::nutrition_lookup::NutritionLookupCalorieNinjas;

use business::application::food_log::store::FoodLogStore;

use crate::api::food_log::routes::FoodLogApi;
use crate::api::health::routes::HealthApi;
use crate::api::suggestion::routes::SuggestionApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub food_log_api: FoodLogApi,
    pub suggestion_api: SuggestionApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig, pool: sqlx::SqlitePool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let repository = Arc::new(FoodLogRepositorySqlite::new(pool));
        let lookup = Arc::new(NutritionLookupCalorieNinjas::new(
            config.nutrition_api.build_client(),
        ));

        // The store backs every use case
        let store = Arc::new(
            FoodLogStore::load(lookup, repository, logger, config.budget.budget).await?,
        );

        let food_log_api = FoodLogApi::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        );

        let suggestion_api = SuggestionApi::new(store.clone(), store.clone(), store);

        Ok(Self {
            health_api,
            food_log_api,
            suggestion_api,
        })
    }
}
