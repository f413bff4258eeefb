use std::path::Path;

use business::domain::food_log::model::{FoodRecord, Nutrients, SuggestionHistory};
use business::domain::food_log::repository::FoodLogRepository;
use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use persistence::food_log::repository::{FoodLogRepositorySqlite, SUGGESTIONS_KEY};
use sqlx::SqlitePool;
use tempfile::TempDir;

const WRITTEN_AT: &str = "2025-01-01T00:00:00Z";

async fn open_pool(path: &Path) -> SqlitePool {
    let config = DatabaseConfig::new(format!("sqlite://{}", path.display()));
    let pool = create_sqlite_pool(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

fn record(name: &str, calories: f64, fat: f64, protein: f64, carbs: f64) -> FoodRecord {
    FoodRecord::new(
        name.to_string(),
        Nutrients {
            calories,
            serving_size_g: 100.0,
            fat_total_g: fat,
            protein_g: protein,
            carbohydrates_total_g: carbs,
        },
    )
    .unwrap()
}

#[tokio::test]
async fn should_read_empty_values_from_fresh_database() {
    let dir = TempDir::new().unwrap();
    let repository = FoodLogRepositorySqlite::new(open_pool(&dir.path().join("food.db")).await);

    assert!(repository.load_log().await.unwrap().is_empty());
    assert!(repository.load_suggestions().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_reload_same_records_after_restart() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("food.db");
    let log = vec![
        record("Apple", 52.0, 0.2, 0.3, 14.0),
        record("Rice", 130.0, 0.3, 2.7, 28.2),
        record("Apple", 52.0, 0.2, 0.3, 14.0),
    ];
    let suggestions =
        SuggestionHistory::from_repository(vec!["Apple".to_string(), "rice, white".to_string()]);

    let pool = open_pool(&db_path).await;
    let repository = FoodLogRepositorySqlite::new(pool.clone());
    repository.save_log(&log).await.unwrap();
    repository.save_suggestions(&suggestions).await.unwrap();
    pool.close().await;

    let reopened = FoodLogRepositorySqlite::new(open_pool(&db_path).await);

    assert_eq!(reopened.load_log().await.unwrap(), log);
    assert_eq!(reopened.load_suggestions().await.unwrap(), suggestions);
}

#[tokio::test]
async fn should_replace_previous_value_on_save() {
    let dir = TempDir::new().unwrap();
    let repository = FoodLogRepositorySqlite::new(open_pool(&dir.path().join("food.db")).await);
    repository
        .save_log(&[record("Apple", 52.0, 0.2, 0.3, 14.0)])
        .await
        .unwrap();

    repository.save_log(&[]).await.unwrap();

    assert!(repository.load_log().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_read_comma_joined_suggestions_written_by_older_builds() {
    let dir = TempDir::new().unwrap();
    let pool = open_pool(&dir.path().join("food.db")).await;
    sqlx::query("INSERT INTO preferences (key, value, updated_at) VALUES (?, ?, ?)")
        .bind(SUGGESTIONS_KEY)
        .bind("Apple,Banana")
        .bind(WRITTEN_AT)
        .execute(&pool)
        .await
        .unwrap();
    let repository = FoodLogRepositorySqlite::new(pool);

    let suggestions = repository.load_suggestions().await.unwrap();

    assert_eq!(
        suggestions.entries(),
        &["Apple".to_string(), "Banana".to_string()]
    );
}
