use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::food_log::errors::{FoodLogError, NutritionLookupError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FoodLogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FoodLogError::QueryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_log.query_empty",
            ),
            FoodLogError::Lookup(NutritionLookupError::Network) => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "nutrition_lookup.network_failure",
            ),
            FoodLogError::Lookup(NutritionLookupError::Api { .. }) => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "nutrition_lookup.api_failure",
            ),
            FoodLogError::Lookup(NutritionLookupError::Decode) => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "nutrition_lookup.decode_failure",
            ),
            FoodLogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
