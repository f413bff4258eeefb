use tokio::sync::watch;

use crate::application::food_log::store::FoodLogStore;
use crate::domain::food_log::use_cases::load_query::LoadQueryUseCase;
use crate::domain::food_log::use_cases::set_query::{SetQueryParams, SetQueryUseCase};

// The free-text query lives in memory only.
impl SetQueryUseCase for FoodLogStore {
    fn execute(&self, params: SetQueryParams) {
        self.query.send_replace(params.query);
    }
}

impl LoadQueryUseCase for FoodLogStore {
    fn execute(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::food_log::test_support::{
        InMemoryFoodLogRepository, MockLookup, store_with,
    };

    #[tokio::test]
    async fn should_publish_query_changes() {
        let repository = Arc::new(InMemoryFoodLogRepository::default());
        let store = store_with(MockLookup::new(), repository.clone()).await;
        let mut receiver = LoadQueryUseCase::execute(&store);

        SetQueryUseCase::execute(
            &store,
            SetQueryParams {
                query: "App".to_string(),
            },
        );

        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), "App");
        assert_eq!(*LoadQueryUseCase::execute(&store).borrow(), "App");
        assert_eq!(repository.log_writes(), 0);
        assert_eq!(repository.suggestion_writes(), 0);
    }
}
