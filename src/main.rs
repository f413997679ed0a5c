use restaurant_listing::{
    api::{start_api_server, ApiState},
    config::AppConfig,
    observability::{init_logging, log_config_info},
    storage::{check_connection, create_pool},
    Result, APP_NAME, VERSION,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (optional - won't fail if missing)
    // This must happen before any config is read from environment
    let dotenv_result = dotenvy::dotenv();

    let config = AppConfig::from_env()?;
    init_logging(&config.observability)?;

    match dotenv_result {
        Ok(path) => info!(path = %path.display(), "Loaded environment from .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => error!(error = %e, "Failed to parse .env file"),
    }

    info!(app_name = APP_NAME, version = VERSION, "Starting restaurant listing service");
    log_config_info(&config);

    let pool = create_pool(&config.database).await?;
    check_connection(&pool).await?;

    let state = ApiState::from_pool(pool.clone());

    if let Err(e) = start_api_server(config.server.clone(), state).await {
        error!(error = %e, "API server terminated with error");
        pool.close().await;
        return Err(e);
    }

    pool.close().await;
    info!("Restaurant listing service stopped");
    Ok(())
}
