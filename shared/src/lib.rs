use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use strum::IntoEnumIterator;

/// Model input columns, declared in the order the regressor was trained on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    CropEncoded,
    Ndvi,
    Rainfall,
    SoilPh,
    Temperature,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelInput {
    #[serde(deserialize_with = "lax_integer")]
    pub crop_encoded: i64, // 0-45 (mapped crop)
    pub ndvi: f64,         // 0-1 scale
    pub rainfall: f64,     // mm
    pub soil_ph: f64,
    pub temperature: f64, // °C
}

impl ModelInput {
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::CropEncoded => self.crop_encoded as f64,
            Feature::Ndvi => self.ndvi,
            Feature::Rainfall => self.rainfall,
            Feature::SoilPh => self.soil_ph,
            Feature::Temperature => self.temperature,
        }
    }

    pub fn feature_row(&self) -> Vec<f64> {
        Feature::iter().map(|feature| self.value(feature)).collect()
    }
}

/// Accepts integral floats (`5.0`) as integers. Values beyond the `i64`
/// range saturate, so they still fail range validation instead of parsing.
fn lax_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LaxInteger;

    impl Visitor<'_> for LaxInteger {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.fract() == 0.0 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(LaxInteger)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelOutput {
    pub predicted_yield: f64,
    pub outcome_quality: f64,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}
