use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::artifact::ModelArtifact;
use super::error::ModelError;

pub const MODEL_FILE_NAME: &str = "final_model.json";
pub const SHARED_MODELS_DIR: &str = "app/models";

/// Candidate locations of the serialized model, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl Default for ModelPaths {
    fn default() -> Self {
        let service_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        // Under cargo the shared models live beside the workspace; a deployed
        // binary carries them next to itself.
        let models_root = match env::var("CARGO_MANIFEST_DIR") {
            Ok(manifest_dir) => Path::new(&manifest_dir).join(".."),
            Err(_) => service_dir.clone(),
        };

        Self {
            primary: models_root.join(SHARED_MODELS_DIR).join(MODEL_FILE_NAME),
            fallback: service_dir.join(MODEL_FILE_NAME),
        }
    }
}

impl ModelPaths {
    pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    pub fn resolve(&self) -> Result<&Path, ModelError> {
        if self.primary.exists() {
            return Ok(&self.primary);
        }
        log::warn!(
            "No model at {}, trying {}",
            self.primary.display(),
            self.fallback.display()
        );
        if self.fallback.exists() {
            return Ok(&self.fallback);
        }
        Err(ModelError::NotFound {
            primary: self.primary.clone(),
            fallback: self.fallback.clone(),
        })
    }
}

pub fn read_artifact(path: &Path) -> Result<ModelArtifact, ModelError> {
    let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
