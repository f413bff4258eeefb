use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use crate::application::food_log::store::FoodLogStore;
use crate::domain::errors::RepositoryError;
use crate::domain::food_log::model::{FoodRecord, Nutrients, SuggestionHistory};
use crate::domain::food_log::repository::FoodLogRepository;
use crate::domain::food_log::services::{NutritionLookupService, NutritionQueryResult};
use crate::domain::food_log::summary::DailyBudget;
use crate::domain::logger::Logger;

mock! {
    pub Lookup {}

    #[async_trait]
    impl NutritionLookupService for Lookup {
        async fn fetch(&self, query: &str) -> NutritionQueryResult;
    }
}

mock! {
    pub FoodLogRepo {}

    #[async_trait]
    impl FoodLogRepository for FoodLogRepo {
        async fn load_log(&self) -> Result<Vec<FoodRecord>, RepositoryError>;
        async fn save_log(&self, log: &[FoodRecord]) -> Result<(), RepositoryError>;
        async fn load_suggestions(&self) -> Result<SuggestionHistory, RepositoryError>;
        async fn save_suggestions(&self, suggestions: &SuggestionHistory) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Repository double that keeps the stored values and counts writes.
#[derive(Default)]
pub struct InMemoryFoodLogRepository {
    log: Mutex<Vec<FoodRecord>>,
    suggestions: Mutex<SuggestionHistory>,
    log_writes: AtomicUsize,
    suggestion_writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryFoodLogRepository {
    pub fn seeded(log: Vec<FoodRecord>, suggestions: SuggestionHistory) -> Self {
        Self {
            log: Mutex::new(log),
            suggestions: Mutex::new(suggestions),
            ..Self::default()
        }
    }

    pub fn stored_log(&self) -> Vec<FoodRecord> {
        self.log.lock().unwrap().clone()
    }

    pub fn stored_suggestions(&self) -> SuggestionHistory {
        self.suggestions.lock().unwrap().clone()
    }

    pub fn log_writes(&self) -> usize {
        self.log_writes.load(Ordering::SeqCst)
    }

    pub fn suggestion_writes(&self) -> usize {
        self.suggestion_writes.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl FoodLogRepository for InMemoryFoodLogRepository {
    async fn load_log(&self) -> Result<Vec<FoodRecord>, RepositoryError> {
        Ok(self.stored_log())
    }

    async fn save_log(&self, log: &[FoodRecord]) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Persistence);
        }
        *self.log.lock().unwrap() = log.to_vec();
        self.log_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_suggestions(&self) -> Result<SuggestionHistory, RepositoryError> {
        Ok(self.stored_suggestions())
    }

    async fn save_suggestions(
        &self,
        suggestions: &SuggestionHistory,
    ) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Persistence);
        }
        *self.suggestions.lock().unwrap() = suggestions.clone();
        self.suggestion_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn record_named(name: &str, calories: f64) -> FoodRecord {
    FoodRecord::new(
        name.to_string(),
        Nutrients {
            calories,
            serving_size_g: 100.0,
            ..Nutrients::default()
        },
    )
    .unwrap()
}

pub fn apple_record() -> FoodRecord {
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
    .unwrap()
}

pub async fn store_with(
    lookup: MockLookup,
    repository: Arc<InMemoryFoodLogRepository>,
) -> FoodLogStore {
    FoodLogStore::load(
        Arc::new(lookup),
        repository,
        mock_logger(),
        DailyBudget::default(),
    )
    .await
    .unwrap()
}
