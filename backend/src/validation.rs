use std::ops::RangeInclusive;

use shared::ModelInput;

const CROP_ENCODED_RANGE: RangeInclusive<i64> = 0..=45;
const NDVI_RANGE: RangeInclusive<f64> = 0.0..=1.0;
const SOIL_PH_RANGE: RangeInclusive<f64> = 3.0..=10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Crop encoded must be between 0 and 45")]
    CropEncoded,
    #[error("NDVI must be between 0 and 1")]
    Ndvi,
    #[error("Soil pH must be between 3 and 10")]
    SoilPh,
}

/// Range checks applied before inference, first failure wins. Rainfall and
/// temperature are deliberately left unbounded.
pub fn validate(input: &ModelInput) -> Result<(), ValidationError> {
    if !CROP_ENCODED_RANGE.contains(&input.crop_encoded) {
        return Err(ValidationError::CropEncoded);
    }
    if !NDVI_RANGE.contains(&input.ndvi) {
        return Err(ValidationError::Ndvi);
    }
    if !SOIL_PH_RANGE.contains(&input.soil_ph) {
        return Err(ValidationError::SoilPh);
    }
    Ok(())
}
