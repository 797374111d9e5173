use ndarray::Array2;
use shared::Feature;
use strum::{EnumCount, IntoEnumIterator};

use super::artifact::ModelArtifact;
use super::error::{InferenceError, ModelError};
use super::loader::{ModelPaths, read_artifact};

/// Read-only wrapper around the loaded regressor. Built once at startup and
/// shared by every request through `web::Data`.
#[derive(Debug)]
pub struct PredictionService {
    artifact: ModelArtifact,
}

impl PredictionService {
    pub fn load(paths: &ModelPaths) -> Result<Self, ModelError> {
        Self::try_load(paths).inspect_err(|e| log::error!("Error loading model: {}", e))
    }

    fn try_load(paths: &ModelPaths) -> Result<Self, ModelError> {
        let path = paths.resolve()?;
        let service = Self::from_artifact(read_artifact(path)?)?;
        log::info!("Model loaded successfully from {}", path.display());
        Ok(service)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;

        if artifact.n_features != Feature::COUNT {
            return Err(ModelError::Incompatible(format!(
                "model expects {} features, service provides {}",
                artifact.n_features,
                Feature::COUNT
            )));
        }
        if !artifact.feature_names.is_empty() {
            let expected: Vec<String> = Feature::iter().map(|f| f.to_string()).collect();
            if artifact.feature_names != expected {
                return Err(ModelError::Incompatible(format!(
                    "feature order {:?} does not match {:?}",
                    artifact.feature_names, expected
                )));
            }
        }

        Ok(Self { artifact })
    }

    /// Features are `[crop_encoded, ndvi, rainfall, soil_ph, temperature]`;
    /// only the first row's prediction is returned.
    pub fn predict(&self, features: &Array2<f64>) -> Result<f64, InferenceError> {
        let prediction = self
            .artifact
            .predict(features.view())?
            .first()
            .copied()
            .ok_or(InferenceError::NoOutput)?;

        if !prediction.is_finite() {
            return Err(InferenceError::NonFinite(prediction));
        }
        Ok(prediction)
    }
}
