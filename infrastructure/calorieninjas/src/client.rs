use std::time::Duration;

use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://api.calorieninjas.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bounded exponential backoff for transient lookup failures.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// Never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::ZERO,
        }
    }

    /// Delay before the given retry (1-based): `initial_backoff * 2^(retry - 1)`.
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }
}

/// Shared CalorieNinjas HTTP client configuration.
pub struct CalorieNinjasClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub retry: RetryPolicy,
}

impl CalorieNinjasClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the nutrition endpoint URL.
    pub fn nutrition_url(&self) -> String {
        format!("{}/nutrition", self.base_url.trim_end_matches('/'))
    }
}
