use actix_web::{HttpResponse, web};
use chrono::{SecondsFormat, Utc};
use log::error;
use ndarray::{Array1, Array2, Axis};
use shared::{HealthResponse, ModelInput, ModelOutput};

use crate::error::ApiError;
use crate::predictor::PredictionService;
use crate::quality::{outcome_quality, round2};
use crate::validation::validate;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Payload(err.to_string()).into()),
    )
    .service(web::resource("/health").route(web::get().to(health_check)))
    .service(web::resource("/predict").route(web::post().to(predict_yield)))
    .default_service(web::to(not_found));
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".into(),
    })
}

async fn predict_yield(
    model: web::Data<PredictionService>,
    input: web::Json<ModelInput>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    validate(&input)?;

    let features = feature_matrix(&input);
    let predicted_yield = model.predict(&features).map_err(|e| {
        error!("Prediction error: {}", e);
        ApiError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(ModelOutput {
        predicted_yield: round2(predicted_yield),
        outcome_quality: round2(outcome_quality(&input)),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}

async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

/// Single-row matrix in `Feature` order.
fn feature_matrix(input: &ModelInput) -> Array2<f64> {
    Array1::from_vec(input.feature_row()).insert_axis(Axis(0))
}
