use std::pin::Pin;
use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::EventStream, payload::Json};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};

use business::domain::food_log::use_cases::load_query::LoadQueryUseCase;
use business::domain::food_log::use_cases::load_suggestions::LoadSuggestionsUseCase;
use business::domain::food_log::use_cases::set_query::{SetQueryParams, SetQueryUseCase};

use crate::api::suggestion::dto::{QueryRequest, QueryResponse, SuggestionsResponse};
use crate::api::tags::ApiTags;

pub type SuggestionStream = Pin<Box<dyn Stream<Item = SuggestionsResponse> + Send>>;
pub type QueryStream = Pin<Box<dyn Stream<Item = QueryResponse> + Send>>;

pub struct SuggestionApi {
    load_suggestions_use_case: Arc<dyn LoadSuggestionsUseCase>,
    set_query_use_case: Arc<dyn SetQueryUseCase>,
    load_query_use_case: Arc<dyn LoadQueryUseCase>,
}

impl SuggestionApi {
    pub fn new(
        load_suggestions_use_case: Arc<dyn LoadSuggestionsUseCase>,
        set_query_use_case: Arc<dyn SetQueryUseCase>,
        load_query_use_case: Arc<dyn LoadQueryUseCase>,
    ) -> Self {
        Self {
            load_suggestions_use_case,
            set_query_use_case,
            load_query_use_case,
        }
    }
}

/// Search suggestions API
///
/// Autocomplete history and the text currently typed by the user.
#[OpenApi]
impl SuggestionApi {
    /// List suggestions
    ///
    /// Past queries containing `query` (case-insensitive). Without `query`
    /// the whole history is returned.
    #[oai(path = "/suggestions", method = "get", tag = "ApiTags::Suggestions")]
    async fn get_all(&self, query: Query<Option<String>>) -> Json<SuggestionsResponse> {
        let filter = query.0.unwrap_or_default();
        Json(SuggestionsResponse {
            suggestions: self.load_suggestions_use_case.matching(&filter),
        })
    }

    /// Suggestion updates
    ///
    /// Server-sent events with the full history, current value first.
    #[oai(
        path = "/suggestions/stream",
        method = "get",
        tag = "ApiTags::Suggestions"
    )]
    async fn stream(&self) -> EventStream<SuggestionStream> {
        let updates = WatchStream::new(self.load_suggestions_use_case.execute()).map(|history| {
            SuggestionsResponse {
                suggestions: history.entries().to_vec(),
            }
        });
        EventStream::new(Box::pin(updates) as SuggestionStream)
    }

    /// Current query
    #[oai(path = "/query", method = "get", tag = "ApiTags::Suggestions")]
    async fn get_query(&self) -> Json<QueryResponse> {
        let query = self.load_query_use_case.execute().borrow().clone();
        Json(QueryResponse { query })
    }

    /// Update the current query
    ///
    /// Publishes the text to `/query/stream` subscribers. Nothing is searched or stored.
    #[oai(path = "/query", method = "put", tag = "ApiTags::Suggestions")]
    async fn set_query(&self, body: Json<QueryRequest>) -> Json<QueryResponse> {
        let query = body.0.query;
        self.set_query_use_case.execute(SetQueryParams {
            query: query.clone(),
        });
        Json(QueryResponse { query })
    }

    /// Query updates
    #[oai(path = "/query/stream", method = "get", tag = "ApiTags::Suggestions")]
    async fn query_stream(&self) -> EventStream<QueryStream> {
        let updates = WatchStream::new(self.load_query_use_case.execute())
            .map(|query| QueryResponse { query });
        EventStream::new(Box::pin(updates) as QueryStream)
    }
}
