use async_trait::async_trait;

use crate::application::food_log::store::FoodLogStore;
use crate::domain::food_log::errors::FoodLogError;
use crate::domain::food_log::model::FoodRecord;
use crate::domain::food_log::use_cases::search::{SearchFoodParams, SearchFoodUseCase};

#[async_trait]
impl SearchFoodUseCase for FoodLogStore {
    async fn execute(&self, params: SearchFoodParams) -> Result<Vec<FoodRecord>, FoodLogError> {
        let query = params.query.trim();
        if query.is_empty() {
            self.logger.warn("Rejected search with an empty query");
            return Err(FoodLogError::QueryEmpty);
        }

        self.logger.info(&format!("Searching foods: {}", query));

        let records = self.lookup.fetch(query).await.map_err(|err| {
            self.logger
                .warn(&format!("Nutrition lookup for '{}' failed: {}", query, err));
            FoodLogError::from(err)
        })?;

        let _guard = self.write_lock.lock().await;

        let mut next_log = self.log.borrow().clone();
        next_log.extend(records.iter().cloned());
        let log_result = self.persist_log(next_log).await;

        // Recorded even when the lookup matched nothing.
        let next_suggestions = self.suggestions.borrow().with_query(query);
        let suggestions_result = match next_suggestions {
            Some(next) => self.persist_suggestions(next).await,
            None => Ok(()),
        };

        log_result?;
        suggestions_result?;

        self.logger.info(&format!(
            "Added {} food records for '{}'",
            records.len(),
            query
        ));
        Ok(records)
    }
}
