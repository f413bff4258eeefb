use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::food_log::model::{FoodRecord, Nutrients, SuggestionHistory};

/// One row of the key-value `preferences` table.
#[derive(Debug, FromRow)]
pub struct PreferenceEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Stored shape of a food record inside the `foods` value.
///
/// Older entries may lack an id or macro fields; those are filled in on read.
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodRecordEntity {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub serving_size_g: f64,
    #[serde(default)]
    pub fat_total_g: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbohydrates_total_g: f64,
}

impl FoodRecordEntity {
    pub fn from_domain(record: &FoodRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            calories: record.calories,
            serving_size_g: record.serving_size_g,
            fat_total_g: record.fat_total_g,
            protein_g: record.protein_g,
            carbohydrates_total_g: record.carbohydrates_total_g,
        }
    }

    pub fn into_domain(self) -> FoodRecord {
        FoodRecord::from_repository(
            self.id,
            self.name,
            Nutrients {
                calories: self.calories,
                serving_size_g: self.serving_size_g,
                fat_total_g: self.fat_total_g,
                protein_g: self.protein_g,
                carbohydrates_total_g: self.carbohydrates_total_g,
            },
        )
    }
}

pub fn encode_log(log: &[FoodRecord]) -> Result<String, RepositoryError> {
    let entities: Vec<FoodRecordEntity> = log.iter().map(FoodRecordEntity::from_domain).collect();
    serde_json::to_string(&entities).map_err(|_| RepositoryError::Serialization)
}

pub fn decode_log(value: &str) -> Result<Vec<FoodRecord>, RepositoryError> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entities: Vec<FoodRecordEntity> =
        serde_json::from_str(value).map_err(|_| RepositoryError::Serialization)?;
    Ok(entities.into_iter().map(|e| e.into_domain()).collect())
}

pub fn encode_suggestions(suggestions: &SuggestionHistory) -> Result<String, RepositoryError> {
    serde_json::to_string(suggestions.entries()).map_err(|_| RepositoryError::Serialization)
}

/// Reads a JSON array of terms, or the comma-joined form older builds wrote.
pub fn decode_suggestions(value: &str) -> Result<SuggestionHistory, RepositoryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(SuggestionHistory::new());
    }

    let entries: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|_| RepositoryError::Serialization)?
    } else {
        value.split(',').map(str::to_string).collect()
    };

    Ok(SuggestionHistory::from_repository(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_empty_value_as_empty_log() {
        assert!(decode_log("").unwrap().is_empty());
    }

    #[test]
    fn should_fill_in_missing_fields_of_old_entries() {
        let records = decode_log(r#"[{"name":"Apple","calories":52.0}]"#).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Apple");
        assert_eq!(records[0].calories, 52.0);
        assert_eq!(records[0].protein_g, 0.0);
    }

    #[test]
    fn should_reject_corrupted_log() {
        let result = decode_log("{not json");

        assert!(matches!(result, Err(RepositoryError::Serialization)));
    }

    #[test]
    fn should_keep_commas_inside_json_suggestions() {
        let history = SuggestionHistory::from_repository(vec![
            "rice, beans".to_string(),
            "Apple".to_string(),
        ]);

        let decoded = decode_suggestions(&encode_suggestions(&history).unwrap()).unwrap();

        assert_eq!(decoded, history);
    }

    #[test]
    fn should_read_comma_joined_suggestions() {
        let decoded = decode_suggestions("Apple,Rice,Apple").unwrap();

        assert_eq!(
            decoded.entries(),
            &["Apple".to_string(), "Rice".to_string()]
        );
    }

    #[test]
    fn should_read_empty_value_as_no_suggestions() {
        assert!(decode_suggestions("").unwrap().is_empty());
    }
}
