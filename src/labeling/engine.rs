use std::path::Path;

use image::DynamicImage;
use rten::Model;
use rten_tensor::Tensor;
use rten_tensor::prelude::*;
use tracing::{debug, info};

use crate::{
    error::ClassificationError,
    labeling::{Labeler, LabelerConfig, postprocess, preprocessing},
    models::LabelResult,
};

/// Labeler backed by an rten model and a label list
pub struct RtenLabeler {
    config: LabelerConfig,
    model: Model,
    labels: Vec<String>,
}

impl std::fmt::Debug for RtenLabeler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RtenLabeler")
            .field("config", &self.config)
            .field("labels", &self.labels.len())
            .finish()
    }
}

/// Load the model and labels named by `config`
pub fn init_labeler(config: LabelerConfig) -> Result<RtenLabeler, ClassificationError> {
    if !config.model_path.exists() {
        return Err(ClassificationError::ModelLoad {
            path: config.model_path.clone(),
            message: "model file not found".to_string(),
        });
    }

    info!(model = %config.model_path.display(), choice = %config.choice, "Loading labeling model");
    let model = Model::load_file(&config.model_path).map_err(|e| ClassificationError::ModelLoad {
        path: config.model_path.clone(),
        message: e.to_string(),
    })?;
    let labels = read_labels(&config.labels_path)?;
    info!(labels = labels.len(), choice = %config.choice, "Labeling model ready");

    Ok(RtenLabeler {
        config,
        model,
        labels,
    })
}

/// Read a label file with one category per line
pub fn read_labels(path: &Path) -> Result<Vec<String>, ClassificationError> {
    let text = std::fs::read_to_string(path).map_err(|e| ClassificationError::Labels {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let labels = parse_labels(&text);
    if labels.is_empty() {
        return Err(ClassificationError::Labels {
            path: path.to_path_buf(),
            message: "no labels found".to_string(),
        });
    }
    Ok(labels)
}

/// Blank lines are skipped; surrounding whitespace is trimmed
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl Labeler for RtenLabeler {
    fn config(&self) -> &LabelerConfig {
        &self.config
    }

    fn label(&self, image: &DynamicImage) -> Result<LabelResult, ClassificationError> {
        let input = preprocessing::to_input_tensor(image, self.config.input_size);

        let output = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| ClassificationError::Inference(e.to_string()))?;
        let scores: Tensor<f32> = output
            .try_into()
            .map_err(|e: rten::TryFromValueError| ClassificationError::Inference(e.to_string()))?;
        let scores: Vec<f32> = scores.iter().copied().collect();
        debug!(scores = scores.len(), choice = %self.config.choice, "Model produced scores");

        let probabilities = postprocess::to_probabilities(&scores);
        postprocess::select_labels(
            &probabilities,
            &self.labels,
            self.config.confidence_threshold,
            self.config.max_results,
        )
    }
}
