use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

/// A picked file could not be turned into a classifiable image.
///
/// Sources are held in `Arc` so the error can travel inside GUI messages.
#[derive(Debug, Clone, Error)]
pub enum ImageDecodeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: Arc<image::ImageError>,
    },
}

/// The labeler could not produce a result.
///
/// The display text of each variant is what the user sees after `Error: `.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    #[error("Failed to load model {path}: {message}")]
    ModelLoad { path: PathBuf, message: String },
    #[error("Failed to read labels {path}: {message}")]
    Labels { path: PathBuf, message: String },
    #[error("Inference failed: {0}")]
    Inference(String),
    #[error("Model output has {outputs} scores but {labels} labels are known")]
    OutputMismatch { outputs: usize, labels: usize },
    #[error("Classification was interrupted: {0}")]
    Interrupted(String),
}
