use crate::domain::errors::RepositoryError;

/// Failures of a single nutrition lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NutritionLookupError {
    /// The API could not be reached (connection refused, DNS, timeout).
    #[error("nutrition_lookup.network_failure")]
    Network,
    /// The API answered with a non-2xx status.
    #[error("nutrition_lookup.api_failure")]
    Api { status: u16 },
    /// The response body could not be turned into food records.
    #[error("nutrition_lookup.decode_failure")]
    Decode,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FoodRecordError {
    #[error("food_record.invalid_quantity")]
    InvalidQuantity,
}

#[derive(Debug, thiserror::Error)]
pub enum FoodLogError {
    #[error("food_log.query_empty")]
    QueryEmpty,
    #[error("food_log.lookup_failed")]
    Lookup(#[from] NutritionLookupError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
