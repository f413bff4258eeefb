use tokio::sync::watch;

use crate::application::food_log::store::FoodLogStore;
use crate::domain::food_log::model::{FoodRecord, SuggestionHistory};
use crate::domain::food_log::use_cases::load_log::LoadFoodLogUseCase;
use crate::domain::food_log::use_cases::load_suggestions::LoadSuggestionsUseCase;

impl LoadFoodLogUseCase for FoodLogStore {
    fn execute(&self) -> watch::Receiver<Vec<FoodRecord>> {
        self.log.subscribe()
    }
}

impl LoadSuggestionsUseCase for FoodLogStore {
    fn execute(&self) -> watch::Receiver<SuggestionHistory> {
        self.suggestions.subscribe()
    }

    fn matching(&self, query: &str) -> Vec<String> {
        self.suggestions.borrow().matching(query)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::food_log::test_support::{
        InMemoryFoodLogRepository, MockLookup, apple_record, store_with,
    };
    use crate::domain::food_log::use_cases::clear::ClearFoodLogUseCase;
    use crate::domain::food_log::use_cases::search::{SearchFoodParams, SearchFoodUseCase};

    fn lookup_returning_apple() -> MockLookup {
        let mut lookup = MockLookup::new();
        lookup
            .expect_fetch()
            .returning(|_| Ok(vec![apple_record()]));
        lookup
    }

    #[tokio::test]
    async fn should_yield_latest_log_to_late_subscribers() {
        let store = store_with(
            lookup_returning_apple(),
            Arc::new(InMemoryFoodLogRepository::default()),
        )
        .await;

        SearchFoodUseCase::execute(
            &store,
            SearchFoodParams {
                query: "Apple".to_string(),
            },
        )
        .await
        .unwrap();
        let receiver = LoadFoodLogUseCase::execute(&store);

        assert_eq!(receiver.borrow().len(), 1);
        assert_eq!(receiver.borrow()[0].name, "Apple");
    }

    #[tokio::test]
    async fn should_wake_subscribers_on_every_change() {
        let store = store_with(
            lookup_returning_apple(),
            Arc::new(InMemoryFoodLogRepository::default()),
        )
        .await;
        let mut receiver = LoadFoodLogUseCase::execute(&store);

        SearchFoodUseCase::execute(
            &store,
            SearchFoodParams {
                query: "Apple".to_string(),
            },
        )
        .await
        .unwrap();
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().len(), 1);

        ClearFoodLogUseCase::execute(&store).await.unwrap();
        receiver.changed().await.unwrap();
        assert!(receiver.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn should_yield_empty_log_after_clear_while_keeping_suggestions() {
        let store = store_with(
            lookup_returning_apple(),
            Arc::new(InMemoryFoodLogRepository::default()),
        )
        .await;
        SearchFoodUseCase::execute(
            &store,
            SearchFoodParams {
                query: "Apple".to_string(),
            },
        )
        .await
        .unwrap();

        ClearFoodLogUseCase::execute(&store).await.unwrap();

        assert!(LoadFoodLogUseCase::execute(&store).borrow().is_empty());
        assert!(LoadSuggestionsUseCase::execute(&store)
            .borrow()
            .contains("Apple"));
    }

    #[tokio::test]
    async fn should_filter_suggestions_for_autocomplete() {
        let store = store_with(
            lookup_returning_apple(),
            Arc::new(InMemoryFoodLogRepository::default()),
        )
        .await;
        for query in ["Apple", "Green apple", "Rice"] {
            SearchFoodUseCase::execute(
                &store,
                SearchFoodParams {
                    query: query.to_string(),
                },
            )
            .await
            .unwrap();
        }

        assert_eq!(
            store.matching("apple"),
            vec!["Apple".to_string(), "Green apple".to_string()]
        );
    }
}
