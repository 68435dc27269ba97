pub mod config;
pub mod engine;
pub mod postprocess;
pub mod preprocessing;
pub mod selector;

use std::sync::Arc;

use image::DynamicImage;
use tracing::warn;

use crate::{error::ClassificationError, models::LabelResult};

pub use config::LabelerConfig;
pub use selector::{LabelerSet, ModelSelector};

/// Anything that can assign labels to an image.
///
/// Implementations are shared across the blocking worker threads used for
/// classification, so they must be `Send + Sync`.
pub trait Labeler: Send + Sync + std::fmt::Debug {
    /// Configuration this labeler was built from
    fn config(&self) -> &LabelerConfig;

    /// Classify a decoded image
    fn label(&self, image: &DynamicImage) -> Result<LabelResult, ClassificationError>;
}

/// Stand-in for a model that failed to load; every classification reports the load error
#[derive(Debug)]
pub struct UnavailableLabeler {
    config: LabelerConfig,
    error: ClassificationError,
}

impl UnavailableLabeler {
    pub fn new(config: LabelerConfig, error: ClassificationError) -> Self {
        Self { config, error }
    }
}

impl Labeler for UnavailableLabeler {
    fn config(&self) -> &LabelerConfig {
        &self.config
    }

    fn label(&self, _image: &DynamicImage) -> Result<LabelResult, ClassificationError> {
        Err(self.error.clone())
    }
}

/// Load the rten labeler for `config`, falling back to an [`UnavailableLabeler`]
pub fn load_or_unavailable(config: LabelerConfig) -> Arc<dyn Labeler> {
    match engine::init_labeler(config.clone()) {
        Ok(labeler) => Arc::new(labeler),
        Err(e) => {
            warn!(choice = %config.choice, error = %e, "Labeler unavailable");
            Arc::new(UnavailableLabeler::new(config, e))
        }
    }
}
