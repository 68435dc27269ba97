use std::path::{Path, PathBuf};

use crate::models::ModelChoice;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// Bundled model shipped next to the application
pub const CUSTOM_MODEL_PATH: &str = "assets/model.rten";
pub const CUSTOM_LABELS_PATH: &str = "assets/labels.txt";

/// Parameters for one labeler. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelerConfig {
    pub choice: ModelChoice,
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    /// Labels scoring below this are dropped
    pub confidence_threshold: f32,
    pub max_results: usize,
    /// Side length of the square model input
    pub input_size: u32,
}

impl LabelerConfig {
    /// Pretrained model from the standard cache location (`~/.cache/pixlabel`)
    pub fn default_options() -> anyhow::Result<Self> {
        let dir = default_model_dir()?;
        Ok(Self::new(
            ModelChoice::Default,
            dir.join("default.rten"),
            dir.join("default-labels.txt"),
        ))
    }

    /// Bundled custom model
    pub fn custom(model_path: impl AsRef<Path>, labels_path: impl AsRef<Path>) -> Self {
        Self::new(
            ModelChoice::Custom,
            model_path.as_ref().to_path_buf(),
            labels_path.as_ref().to_path_buf(),
        )
    }

    pub fn new(choice: ModelChoice, model_path: PathBuf, labels_path: PathBuf) -> Self {
        Self {
            choice,
            model_path,
            labels_path,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            input_size: DEFAULT_INPUT_SIZE,
        }
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_labels_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.labels_path = path.into();
        self
    }

    /// Threshold is clamped to [0, 1]
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_input_size(mut self, input_size: u32) -> Self {
        self.input_size = input_size.max(1);
        self
    }
}

/// Directory holding the pretrained default model
pub fn default_model_dir() -> anyhow::Result<PathBuf> {
    let home_dir = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
    Ok(Path::new(&home_dir).join(".cache/pixlabel"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_config_uses_half_threshold() {
        let config = LabelerConfig::custom(CUSTOM_MODEL_PATH, CUSTOM_LABELS_PATH);
        assert_eq!(config.choice, ModelChoice::Custom);
        assert_eq!(config.confidence_threshold, 0.5);
        assert_eq!(config.model_path, PathBuf::from("assets/model.rten"));
    }

    #[test]
    fn threshold_is_clamped() {
        let config = LabelerConfig::custom("m.rten", "l.txt").with_confidence_threshold(1.7);
        assert_eq!(config.confidence_threshold, 1.0);
        let config = config.with_confidence_threshold(-0.2);
        assert_eq!(config.confidence_threshold, 0.0);
    }
}
