//! Failure modes of generating and publishing an artifact.

use std::path::PathBuf;

use image_engine::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// The payload cannot be represented as a QR symbol with the chosen style.
    #[error("cannot encode payload: {0}")]
    Encoding(String),
    #[error("logo asset unreadable at {}: {reason}", .path.display())]
    AssetMissing { path: PathBuf, reason: String },
    #[error("invalid identifier {value:?}: {reason}")]
    InvalidIdentifier { value: String, reason: &'static str },
    #[error("storage directory {} unavailable: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("render error: {0}")]
    Render(EngineError),
}

impl From<EngineError> for ArtifactError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Encode(_) | EngineError::BlockSizeTooSmall { .. } => {
                Self::Encoding(e.to_string())
            }
            other => Self::Render(other),
        }
    }
}
