pub mod app_config;
pub mod budget_config;
pub mod cors_config;
pub mod nutrition_api_config;
pub mod server_config;
pub mod storage_config;
