use farmq_model_service::config::ServerConfig;
use farmq_model_service::predictor::PredictionService;
use farmq_model_service::server;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let model = PredictionService::load(&config.model_paths)
        .map_err(|e| std::io::Error::other(format!("Model loading failed: {}", e)))?;

    server::run(config, model).await
}
