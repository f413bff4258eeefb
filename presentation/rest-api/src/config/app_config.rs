use super::{
    budget_config::BudgetConfig, cors_config, nutrition_api_config::NutritionApiConfig,
    server_config::ServerConfig, storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub nutrition_api: NutritionApiConfig,
    pub storage: StorageConfig,
    pub budget: BudgetConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            nutrition_api: NutritionApiConfig::from_env()?,
            storage: StorageConfig::from_env(),
            budget: BudgetConfig::from_env(),
        })
    }
}
