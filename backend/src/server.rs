use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use crate::config::ServerConfig;
use crate::predictor::PredictionService;
use crate::routes::configure_routes;

pub const API_TITLE: &str = "FarmQ Yield Prediction API";

/// Any origin, method and header, with credentials.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

pub async fn run(config: ServerConfig, model: PredictionService) -> std::io::Result<()> {
    let model = web::Data::new(model);
    let bind_address = config.bind_address();

    log::info!("Starting {} on {}", API_TITLE, bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_policy())
            .wrap(Logger::default())
            .app_data(model.clone())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
