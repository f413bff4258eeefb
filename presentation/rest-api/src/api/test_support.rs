use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use poem::Route;
use poem::test::TestClient;
use poem_openapi::{OpenApi, OpenApiService};

use business::application::food_log::store::FoodLogStore;
use business::domain::errors::RepositoryError;
use business::domain::food_log::errors::NutritionLookupError;
use business::domain::food_log::model::{FoodRecord, Nutrients, SuggestionHistory};
use business::domain::food_log::repository::FoodLogRepository;
use business::domain::food_log::services::{NutritionLookupService, NutritionQueryResult};
use business::domain::food_log::summary::DailyBudget;
use logger::TracingLogger;

/// Matches "Apple", fails for "unavailable", finds nothing otherwise.
struct FakeLookup;

#[async_trait]
impl NutritionLookupService for FakeLookup {
    async fn fetch(&self, query: &str) -> NutritionQueryResult {
        match query {
            "Apple" => Ok(vec![
                FoodRecord::new(
                    "Apple".to_string(),
                    Nutrients {
                        calories: 52.0,
                        serving_size_g: 100.0,
                        fat_total_g: 0.2,
                        protein_g: 0.3,
                        carbohydrates_total_g: 14.0,
                    },
                )
                .unwrap(),
            ]),
            "unavailable" => Err(NutritionLookupError::Api { status: 503 }),
            _ => Ok(vec![]),
        }
    }
}

#[derive(Default)]
struct InMemoryRepository {
    log: Mutex<Vec<FoodRecord>>,
    suggestions: Mutex<SuggestionHistory>,
}

#[async_trait]
impl FoodLogRepository for InMemoryRepository {
    async fn load_log(&self) -> Result<Vec<FoodRecord>, RepositoryError> {
        Ok(self.log.lock().unwrap().clone())
    }

    async fn save_log(&self, log: &[FoodRecord]) -> Result<(), RepositoryError> {
        *self.log.lock().unwrap() = log.to_vec();
        Ok(())
    }

    async fn load_suggestions(&self) -> Result<SuggestionHistory, RepositoryError> {
        Ok(self.suggestions.lock().unwrap().clone())
    }

    async fn save_suggestions(
        &self,
        suggestions: &SuggestionHistory,
    ) -> Result<(), RepositoryError> {
        *self.suggestions.lock().unwrap() = suggestions.clone();
        Ok(())
    }
}

pub async fn test_store() -> Arc<FoodLogStore> {
    let store = FoodLogStore::load(
        Arc::new(FakeLookup),
        Arc::new(InMemoryRepository::default()),
        Arc::new(TracingLogger),
        DailyBudget::default(),
    )
    .await
    .unwrap();
    Arc::new(store)
}

pub fn client_for<T: OpenApi + 'static>(api: T) -> TestClient<Route> {
    let service = OpenApiService::new(api, "test", "1.0");
    TestClient::new(Route::new().nest("/", service))
}
