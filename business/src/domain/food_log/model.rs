use uuid::Uuid;

use super::errors::FoodRecordError;

/// Nutrient quantities reported for one matched food.
///
/// Every quantity is expressed per the serving the API matched, in grams
/// except `calories` (kcal).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nutrients {
    pub calories: f64,
    pub serving_size_g: f64,
    pub fat_total_g: f64,
    pub protein_g: f64,
    pub carbohydrates_total_g: f64,
}

impl Nutrients {
    fn is_valid(&self) -> bool {
        [
            self.calories,
            self.serving_size_g,
            self.fat_total_g,
            self.protein_g,
            self.carbohydrates_total_g,
        ]
        .iter()
        .all(|value| value.is_finite() && *value >= 0.0)
    }
}

/// One nutrition match appended to the food log.
///
/// Records are never mutated once built; the log changes by replacing
/// the collection that holds them.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub serving_size_g: f64,
    pub fat_total_g: f64,
    pub protein_g: f64,
    pub carbohydrates_total_g: f64,
}

impl FoodRecord {
    /// Builds a record for a fresh API match, assigning a new id.
    pub fn new(name: String, nutrients: Nutrients) -> Result<Self, FoodRecordError> {
        if !nutrients.is_valid() {
            return Err(FoodRecordError::InvalidQuantity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            calories: nutrients.calories,
            serving_size_g: nutrients.serving_size_g,
            fat_total_g: nutrients.fat_total_g,
            protein_g: nutrients.protein_g,
            carbohydrates_total_g: nutrients.carbohydrates_total_g,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, nutrients: Nutrients) -> Self {
        Self {
            id,
            name,
            calories: nutrients.calories,
            serving_size_g: nutrients.serving_size_g,
            fat_total_g: nutrients.fat_total_g,
            protein_g: nutrients.protein_g,
            carbohydrates_total_g: nutrients.carbohydrates_total_g,
        }
    }

    pub fn nutrients(&self) -> Nutrients {
        Nutrients {
            calories: self.calories,
            serving_size_g: self.serving_size_g,
            fat_total_g: self.fat_total_g,
            protein_g: self.protein_g,
            carbohydrates_total_g: self.carbohydrates_total_g,
        }
    }
}

/// Distinct past search terms, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionHistory(Vec<String>);

impl SuggestionHistory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Rebuilds a history from stored entries, dropping repeated terms.
    pub fn from_repository(entries: Vec<String>) -> Self {
        let mut history = Self::new();
        for entry in entries {
            if !history.contains(&entry) {
                history.0.push(entry);
            }
        }
        history
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, query: &str) -> bool {
        self.0.iter().any(|entry| entry == query)
    }

    /// Returns the history extended with `query`, or `None` if it is already recorded.
    pub fn with_query(&self, query: &str) -> Option<Self> {
        if self.contains(query) {
            return None;
        }
        let mut entries = self.0.clone();
        entries.push(query.to_string());
        Some(Self(entries))
    }

    /// Entries containing `query`, ignoring case. An empty query matches everything.
    pub fn matching(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.0
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
