use std::env;
use std::time::Duration;

use anyhow::Context;
use calorieninjas::client::{CalorieNinjasClient, RetryPolicy};

/// Configuration for CalorieNinjas API access.
///
/// Environment variables:
/// - CALORIE_NINJAS_API_KEY: API key sent as `X-Api-Key` (required)
/// - CALORIE_NINJAS_BASE_URL: API base URL (default: "https://api.calorieninjas.com/v1")
/// - CALORIE_NINJAS_MAX_RETRIES: retries for transient failures (default: 2)
/// - CALORIE_NINJAS_BACKOFF_MS: first retry delay, doubled per retry (default: 250)
pub struct NutritionApiConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub retry: RetryPolicy,
}

impl NutritionApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("CALORIE_NINJAS_API_KEY")
            .context("CALORIE_NINJAS_API_KEY environment variable must be set")?;
        let base_url = env::var("CALORIE_NINJAS_BASE_URL").ok();

        let defaults = RetryPolicy::default();
        let max_retries = env::var("CALORIE_NINJAS_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.max_retries);
        let initial_backoff = env::var("CALORIE_NINJAS_BACKOFF_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.initial_backoff);

        Ok(Self {
            api_key,
            base_url,
            retry: RetryPolicy {
                max_retries,
                initial_backoff,
            },
        })
    }

    pub fn build_client(&self) -> CalorieNinjasClient {
        let client =
            CalorieNinjasClient::new(self.api_key.clone()).with_retry(self.retry.clone());
        match &self.base_url {
            Some(base_url) => client.with_base_url(base_url.clone()),
            None => client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_point_client_at_configured_base_url() {
        let config = NutritionApiConfig {
            api_key: "secret".to_string(),
            base_url: Some("http://localhost:9000".to_string()),
            retry: RetryPolicy::none(),
        };

        let client = config.build_client();

        assert_eq!(client.nutrition_url(), "http://localhost:9000/nutrition");
        assert_eq!(client.api_key, "secret");
        assert_eq!(client.retry, RetryPolicy::none());
    }
}
