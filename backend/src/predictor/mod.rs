//! Regression model artifact, its on-disk lookup and the prediction service
//! wrapping it.

pub mod artifact;
pub mod error;
pub mod loader;
pub mod model;

pub use artifact::ModelArtifact;
pub use error::{InferenceError, ModelError};
pub use loader::ModelPaths;
pub use model::PredictionService;
