use std::path::PathBuf;

/// Failures while locating or loading the model. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model not found at {} or {}", .primary.display(), .fallback.display())]
    NotFound { primary: PathBuf, fallback: PathBuf },
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Model deserialization error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid model artifact: {0}")]
    Invalid(String),
    #[error("Model incompatible with service features: {0}")]
    Incompatible(String),
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Expected {expected} features, got {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("Feature matrix has no rows")]
    EmptyInput,
    #[error("Model returned no output")]
    NoOutput,
    #[error("Model returned a non-finite value: {0}")]
    NonFinite(f64),
}
