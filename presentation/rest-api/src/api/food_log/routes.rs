use std::pin::Pin;
use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::EventStream, payload::Json};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use business::domain::food_log::use_cases::clear::ClearFoodLogUseCase;
use business::domain::food_log::use_cases::delete::{
    DeleteFoodRecordParams, DeleteFoodRecordUseCase,
};
use business::domain::food_log::use_cases::get_summary::GetDailySummaryUseCase;
use business::domain::food_log::use_cases::load_log::LoadFoodLogUseCase;
use business::domain::food_log::use_cases::search::{SearchFoodParams, SearchFoodUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::food_log::dto::{DailySummaryResponse, FoodRecordResponse, SearchFoodRequest};
use crate::api::tags::ApiTags;

pub type FoodLogStream = Pin<Box<dyn Stream<Item = Vec<FoodRecordResponse>> + Send>>;

pub struct FoodLogApi {
    search_use_case: Arc<dyn SearchFoodUseCase>,
    clear_use_case: Arc<dyn ClearFoodLogUseCase>,
    delete_use_case: Arc<dyn DeleteFoodRecordUseCase>,
    load_log_use_case: Arc<dyn LoadFoodLogUseCase>,
    summary_use_case: Arc<dyn GetDailySummaryUseCase>,
}

impl FoodLogApi {
    pub fn new(
        search_use_case: Arc<dyn SearchFoodUseCase>,
        clear_use_case: Arc<dyn ClearFoodLogUseCase>,
        delete_use_case: Arc<dyn DeleteFoodRecordUseCase>,
        load_log_use_case: Arc<dyn LoadFoodLogUseCase>,
        summary_use_case: Arc<dyn GetDailySummaryUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            clear_use_case,
            delete_use_case,
            load_log_use_case,
            summary_use_case,
        }
    }
}

/// Food log API
///
/// The running diary of matched foods and its daily totals.
#[OpenApi]
impl FoodLogApi {
    /// Current food log
    ///
    /// Returns every logged record in insertion order.
    #[oai(path = "/foods", method = "get", tag = "ApiTags::FoodLog")]
    async fn get_all(&self) -> Json<Vec<FoodRecordResponse>> {
        let log = self.load_log_use_case.execute().borrow().clone();
        Json(log.into_iter().map(|r| r.into()).collect())
    }

    /// Food log updates
    ///
    /// Server-sent events carrying the whole log: the current value first,
    /// then one event per persisted change.
    #[oai(path = "/foods/stream", method = "get", tag = "ApiTags::FoodLog")]
    async fn stream(&self) -> EventStream<FoodLogStream> {
        let updates = WatchStream::new(self.load_log_use_case.execute())
            .map(|log| log.into_iter().map(FoodRecordResponse::from).collect::<Vec<_>>());
        EventStream::new(Box::pin(updates) as FoodLogStream)
    }

    /// Search and log foods
    ///
    /// Looks the query up in the nutrition API, appends every match to the
    /// log and remembers the query for autocomplete.
    #[oai(path = "/foods/search", method = "post", tag = "ApiTags::FoodLog")]
    async fn search(&self, body: Json<SearchFoodRequest>) -> SearchFoodResponse {
        let params = SearchFoodParams {
            query: body.0.query,
        };

        match self.search_use_case.execute(params).await {
            Ok(records) => {
                SearchFoodResponse::Ok(Json(records.into_iter().map(|r| r.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchFoodResponse::BadRequest(json),
                    502 => SearchFoodResponse::BadGateway(json),
                    _ => SearchFoodResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear the food log
    ///
    /// Removes every record. Suggestions are kept.
    #[oai(path = "/foods", method = "delete", tag = "ApiTags::FoodLog")]
    async fn clear(&self) -> ClearFoodLogResponse {
        match self.clear_use_case.execute().await {
            Ok(()) => ClearFoodLogResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearFoodLogResponse::InternalError(json)
            }
        }
    }

    /// Delete a food record
    ///
    /// Unknown ids are ignored.
    #[oai(path = "/foods/:id", method = "delete", tag = "ApiTags::FoodLog")]
    async fn delete(&self, id: Path<String>) -> DeleteFoodRecordResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteFoodRecordResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "food_log.invalid_id".to_string(),
                }));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteFoodRecordParams { id: uuid })
            .await
        {
            Ok(_) => DeleteFoodRecordResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteFoodRecordResponse::InternalError(json)
            }
        }
    }

    /// Daily summary
    ///
    /// Calorie and macro totals of the log against the daily budget.
    #[oai(path = "/summary", method = "get", tag = "ApiTags::FoodLog")]
    async fn summary(&self) -> Json<DailySummaryResponse> {
        Json(self.summary_use_case.execute().into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchFoodResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FoodRecordResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearFoodLogResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFoodRecordResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
