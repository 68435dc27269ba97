use std::sync::Arc;

use image::DynamicImage;
use tracing::debug;

use crate::{
    error::ClassificationError,
    labeling::Labeler,
    models::{LabelResult, ModelChoice},
};

/// Identifies one classification request; later requests have larger ids
pub type RequestId = u64;

/// Everything needed to run one classification
#[derive(Debug, Clone)]
pub struct ClassifyRequest {
    pub id: RequestId,
    pub labeler: Arc<dyn Labeler>,
    pub image: Arc<DynamicImage>,
}

impl ClassifyRequest {
    pub fn choice(&self) -> ModelChoice {
        self.labeler.config().choice
    }
}

/// The single terminal outcome of a request
#[derive(Debug, Clone)]
pub struct ClassifyOutcome {
    pub id: RequestId,
    pub result: Result<LabelResult, ClassificationError>,
}

/// Run the request's labeler on a blocking worker and resolve once with its outcome
pub async fn classify(request: ClassifyRequest) -> ClassifyOutcome {
    let ClassifyRequest { id, labeler, image } = request;
    debug!(id, choice = %labeler.config().choice, "Classification started");

    let result = tokio::task::spawn_blocking(move || labeler.label(&image))
        .await
        .unwrap_or_else(|e| Err(ClassificationError::Interrupted(e.to_string())));

    match &result {
        Ok(labels) => debug!(id, labels = labels.len(), "Classification finished"),
        Err(e) => debug!(id, error = %e, "Classification failed"),
    }

    ClassifyOutcome { id, result }
}
