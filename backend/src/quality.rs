use shared::ModelInput;

const BASE_QUALITY: f64 = 0.5;
const MAX_QUALITY: f64 = 0.95;

/// How favorable the growing conditions are, independent of the model's
/// prediction. Each optimal range adds a fixed bonus to the base score.
pub fn outcome_quality(input: &ModelInput) -> f64 {
    let mut quality = BASE_QUALITY;

    if (6.0..=7.5).contains(&input.soil_ph) {
        quality += 0.15;
    }
    if (0.3..=0.8).contains(&input.ndvi) {
        quality += 0.15;
    }
    if (500.0..=1500.0).contains(&input.rainfall) {
        quality += 0.15;
    }
    if (20.0..=30.0).contains(&input.temperature) {
        quality += 0.05;
    }

    quality.min(MAX_QUALITY)
}

/// Rounds half away from zero to two decimals. Magnitudes too large to scale
/// have no fractional part and are returned as is.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}
