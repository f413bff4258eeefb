use async_trait::async_trait;
use serde::Deserialize;

use business::domain::food_log::errors::NutritionLookupError;
use business::domain::food_log::model::{FoodRecord, Nutrients};
use business::domain::food_log::services::{NutritionLookupService, NutritionQueryResult};

use crate::client::CalorieNinjasClient;

#[derive(Deserialize)]
struct NutritionResponse {
    #[serde(default)]
    items: Vec<NutritionItem>,
}

#[derive(Deserialize)]
struct NutritionItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    serving_size_g: Option<f64>,
    #[serde(default)]
    fat_total_g: Option<f64>,
    #[serde(default)]
    protein_g: Option<f64>,
    #[serde(default)]
    carbohydrates_total_g: Option<f64>,
}

impl NutritionItem {
    fn into_domain(self) -> Result<FoodRecord, NutritionLookupError> {
        let nutrients = Nutrients {
            calories: self.calories.unwrap_or_default(),
            serving_size_g: self.serving_size_g.unwrap_or_default(),
            fat_total_g: self.fat_total_g.unwrap_or_default(),
            protein_g: self.protein_g.unwrap_or_default(),
            carbohydrates_total_g: self.carbohydrates_total_g.unwrap_or_default(),
        };

        FoodRecord::new(self.name.unwrap_or_default(), nutrients)
            .map_err(|_| NutritionLookupError::Decode)
    }
}

/// `NutritionLookupService` backed by the CalorieNinjas `/nutrition` endpoint.
pub struct NutritionLookupCalorieNinjas {
    client: CalorieNinjasClient,
}

impl NutritionLookupCalorieNinjas {
    pub fn new(client: CalorieNinjasClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> NutritionQueryResult {
        let data: NutritionResponse =
            serde_json::from_str(body).map_err(|_| NutritionLookupError::Decode)?;

        data.items
            .into_iter()
            .map(NutritionItem::into_domain)
            .collect()
    }

    /// Transport errors, 429 and 5xx may succeed on a later attempt.
    fn is_transient(error: &NutritionLookupError) -> bool {
        match error {
            NutritionLookupError::Network => true,
            NutritionLookupError::Api { status } => *status == 429 || (500..600).contains(status),
            NutritionLookupError::Decode => false,
        }
    }

    async fn fetch_once(&self, query: &str) -> NutritionQueryResult {
        let response = self
            .client
            .client
            .get(self.client.nutrition_url())
            .query(&[("query", query)])
            .header("X-Api-Key", &self.client.api_key)
            .send()
            .await
            .map_err(|_| NutritionLookupError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NutritionLookupError::Api {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|_| NutritionLookupError::Network)?;

        Self::parse_response(&body)
    }
}

#[async_trait]
impl NutritionLookupService for NutritionLookupCalorieNinjas {
    async fn fetch(&self, query: &str) -> NutritionQueryResult {
        let policy = &self.client.retry;
        let mut retries = 0;

        loop {
            match self.fetch_once(query).await {
                Err(err) if Self::is_transient(&err) && retries < policy.max_retries => {
                    retries += 1;
                    let backoff = policy.backoff_for(retries);
                    tracing::warn!(
                        "Nutrition lookup failed ({}), retry {}/{} in {:?}",
                        err,
                        retries,
                        policy.max_retries,
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                }
                result => return result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_item_field() {
        let body = r#"{"items":[{"name":"apple","calories":52.0,"serving_size_g":100.0,
            "fat_total_g":0.2,"protein_g":0.3,"carbohydrates_total_g":14.0,
            "sugar_g":10.3,"fiber_g":2.4}]}"#;

        let records = NutritionLookupCalorieNinjas::parse_response(body).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "apple");
        assert_eq!(records[0].calories, 52.0);
        assert_eq!(records[0].serving_size_g, 100.0);
        assert_eq!(records[0].fat_total_g, 0.2);
        assert_eq!(records[0].protein_g, 0.3);
        assert_eq!(records[0].carbohydrates_total_g, 14.0);
    }

    #[test]
    fn should_default_missing_and_null_quantities_to_zero() {
        let body = r#"{"items":[{"name":"tea","calories":null}]}"#;

        let records = NutritionLookupCalorieNinjas::parse_response(body).unwrap();

        assert_eq!(records[0].calories, 0.0);
        assert_eq!(records[0].protein_g, 0.0);
        assert_eq!(records[0].serving_size_g, 0.0);
    }

    #[test]
    fn should_keep_api_order() {
        let body = r#"{"items":[{"name":"egg"},{"name":"bacon"},{"name":"toast"}]}"#;

        let names: Vec<String> = NutritionLookupCalorieNinjas::parse_response(body)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["egg", "bacon", "toast"]);
    }

    #[test]
    fn should_treat_missing_items_as_no_matches() {
        let records = NutritionLookupCalorieNinjas::parse_response("{}").unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn should_fail_to_decode_malformed_body() {
        let result = NutritionLookupCalorieNinjas::parse_response("<html>oops</html>");

        assert_eq!(result, Err(NutritionLookupError::Decode));
    }

    #[test]
    fn should_fail_to_decode_negative_quantity() {
        let body = r#"{"items":[{"name":"void","calories":-5}]}"#;

        let result = NutritionLookupCalorieNinjas::parse_response(body);

        assert_eq!(result, Err(NutritionLookupError::Decode));
    }

    #[test]
    fn should_only_retry_transient_failures() {
        assert!(NutritionLookupCalorieNinjas::is_transient(
            &NutritionLookupError::Network
        ));
        assert!(NutritionLookupCalorieNinjas::is_transient(
            &NutritionLookupError::Api { status: 503 }
        ));
        assert!(NutritionLookupCalorieNinjas::is_transient(
            &NutritionLookupError::Api { status: 429 }
        ));
        assert!(!NutritionLookupCalorieNinjas::is_transient(
            &NutritionLookupError::Api { status: 400 }
        ));
        assert!(!NutritionLookupCalorieNinjas::is_transient(
            &NutritionLookupError::Decode
        ));
    }
}
