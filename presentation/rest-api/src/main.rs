use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Calorie tracker entry point
///
/// Loads configuration, opens local storage, seeds the food log store and
/// serves the binding surface the UI talks to.
/// - config/: Application configuration (server, CORS, nutrition API, storage, budget)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Open local storage
    let pool = config.storage.init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config, pool).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
