use tokio::sync::watch;

use crate::domain::food_log::model::SuggestionHistory;

pub trait LoadSuggestionsUseCase: Send + Sync {
    /// Subscribes to the persisted suggestion history.
    fn execute(&self) -> watch::Receiver<SuggestionHistory>;

    /// Past queries matching `query` for autocomplete.
    fn matching(&self, query: &str) -> Vec<String>;
}
