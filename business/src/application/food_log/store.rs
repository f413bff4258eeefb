use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::domain::food_log::errors::FoodLogError;
use crate::domain::food_log::model::{FoodRecord, SuggestionHistory};
use crate::domain::food_log::repository::FoodLogRepository;
use crate::domain::food_log::services::NutritionLookupService;
use crate::domain::food_log::summary::DailyBudget;
use crate::domain::logger::Logger;

/// Single owner of the food log, the suggestion history and the current query.
///
/// Mutations compute the next value, write it to the repository and only
/// then publish it on the matching watch channel, so subscribers never see
/// a value that is not durable. The write lock serializes that step; lookups
/// run outside of it and may overlap freely.
///
/// A failed write leaves both memory and storage on the previous value.
pub struct FoodLogStore {
    pub(crate) lookup: Arc<dyn NutritionLookupService>,
    pub(crate) repository: Arc<dyn FoodLogRepository>,
    pub(crate) logger: Arc<dyn Logger>,
    pub(crate) budget: DailyBudget,
    pub(crate) write_lock: Mutex<()>,
    pub(crate) log: watch::Sender<Vec<FoodRecord>>,
    pub(crate) suggestions: watch::Sender<SuggestionHistory>,
    pub(crate) query: watch::Sender<String>,
}

impl FoodLogStore {
    /// Seeds the store from durable storage.
    pub async fn load(
        lookup: Arc<dyn NutritionLookupService>,
        repository: Arc<dyn FoodLogRepository>,
        logger: Arc<dyn Logger>,
        budget: DailyBudget,
    ) -> Result<Self, FoodLogError> {
        logger.info("Loading persisted food log");

        let log = repository.load_log().await.map_err(|err| {
            logger.error(&format!("Failed to load food log: {}", err));
            FoodLogError::from(err)
        })?;
        let suggestions = repository.load_suggestions().await.map_err(|err| {
            logger.error(&format!("Failed to load suggestions: {}", err));
            FoodLogError::from(err)
        })?;

        logger.info(&format!(
            "Loaded {} food records and {} suggestions",
            log.len(),
            suggestions.len()
        ));

        let (log, _) = watch::channel(log);
        let (suggestions, _) = watch::channel(suggestions);
        let (query, _) = watch::channel(String::new());

        Ok(Self {
            lookup,
            repository,
            logger,
            budget,
            write_lock: Mutex::new(()),
            log,
            suggestions,
            query,
        })
    }

    /// Writes `next` as the new log and publishes it. Caller holds `write_lock`.
    pub(crate) async fn persist_log(&self, next: Vec<FoodRecord>) -> Result<(), FoodLogError> {
        if let Err(err) = self.repository.save_log(&next).await {
            self.logger
                .error(&format!("Failed to persist food log: {}", err));
            return Err(err.into());
        }
        self.log.send_replace(next);
        Ok(())
    }

    /// Writes `next` as the new suggestion history and publishes it. Caller holds `write_lock`.
    pub(crate) async fn persist_suggestions(
        &self,
        next: SuggestionHistory,
    ) -> Result<(), FoodLogError> {
        if let Err(err) = self.repository.save_suggestions(&next).await {
            self.logger
                .error(&format!("Failed to persist suggestions: {}", err));
            return Err(err.into());
        }
        self.suggestions.send_replace(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::food_log::test_support::{
        InMemoryFoodLogRepository, MockFoodLogRepo, MockLookup, apple_record, mock_logger,
    };
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_start_empty_when_nothing_persisted() {
        let store = FoodLogStore::load(
            Arc::new(MockLookup::new()),
            Arc::new(InMemoryFoodLogRepository::default()),
            mock_logger(),
            DailyBudget::default(),
        )
        .await
        .unwrap();

        assert!(store.log.borrow().is_empty());
        assert!(store.suggestions.borrow().is_empty());
        assert_eq!(*store.query.borrow(), "");
    }

    #[tokio::test]
    async fn should_seed_state_from_repository() {
        let record = apple_record();
        let repository = InMemoryFoodLogRepository::seeded(
            vec![record.clone()],
            SuggestionHistory::from_repository(vec!["Apple".to_string()]),
        );

        let store = FoodLogStore::load(
            Arc::new(MockLookup::new()),
            Arc::new(repository),
            mock_logger(),
            DailyBudget::default(),
        )
        .await
        .unwrap();

        assert_eq!(*store.log.borrow(), vec![record]);
        assert!(store.suggestions.borrow().contains("Apple"));
    }

    #[tokio::test]
    async fn should_fail_when_storage_unreadable() {
        let mut repository = MockFoodLogRepo::new();
        repository
            .expect_load_log()
            .returning(|| Err(RepositoryError::DatabaseError));

        let result = FoodLogStore::load(
            Arc::new(MockLookup::new()),
            Arc::new(repository),
            mock_logger(),
            DailyBudget::default(),
        )
        .await;

        assert!(matches!(
            result,
            Err(FoodLogError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
