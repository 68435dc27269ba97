use std::sync::Arc;

use tracing::info;

use crate::{
    labeling::{Labeler, LabelerConfig, load_or_unavailable},
    models::ModelChoice,
};

/// The two labelers available for the lifetime of the screen
#[derive(Debug, Clone)]
pub struct LabelerSet {
    default: Arc<dyn Labeler>,
    custom: Arc<dyn Labeler>,
}

impl LabelerSet {
    pub fn new(default: Arc<dyn Labeler>, custom: Arc<dyn Labeler>) -> Self {
        Self { default, custom }
    }

    /// Load both labelers; a model that fails to load is replaced by one that reports the failure
    pub fn load(default: LabelerConfig, custom: LabelerConfig) -> Self {
        Self::new(load_or_unavailable(default), load_or_unavailable(custom))
    }

    pub fn get(&self, choice: ModelChoice) -> &Arc<dyn Labeler> {
        match choice {
            ModelChoice::Default => &self.default,
            ModelChoice::Custom => &self.custom,
        }
    }
}

/// Holds the labelers and which one is active
#[derive(Debug, Clone)]
pub struct ModelSelector {
    labelers: LabelerSet,
    active: ModelChoice,
}

impl ModelSelector {
    pub fn new(labelers: LabelerSet) -> Self {
        Self {
            labelers,
            active: ModelChoice::Default,
        }
    }

    /// Make `option` active; a cleared selection falls back to the default model
    pub fn select(&mut self, option: Option<ModelChoice>) -> ModelChoice {
        self.active = option.unwrap_or_default();
        info!(choice = %self.active, "Model selected");
        self.active
    }

    pub fn active_choice(&self) -> ModelChoice {
        self.active
    }

    pub fn active_labeler(&self) -> Arc<dyn Labeler> {
        self.labelers.get(self.active).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ClassificationError, labeling::UnavailableLabeler};

    fn unavailable(choice: ModelChoice) -> Arc<dyn Labeler> {
        let config = LabelerConfig::new(choice, "m.rten".into(), "l.txt".into());
        Arc::new(UnavailableLabeler::new(
            config,
            ClassificationError::Inference("offline".to_string()),
        ))
    }

    fn selector() -> ModelSelector {
        ModelSelector::new(LabelerSet::new(
            unavailable(ModelChoice::Default),
            unavailable(ModelChoice::Custom),
        ))
    }

    #[test]
    fn starts_on_default_model() {
        let selector = selector();
        assert_eq!(selector.active_choice(), ModelChoice::Default);
        assert_eq!(selector.active_labeler().config().choice, ModelChoice::Default);
    }

    #[test]
    fn select_switches_active_labeler() {
        let mut selector = selector();
        assert_eq!(selector.select(Some(ModelChoice::Custom)), ModelChoice::Custom);
        assert_eq!(selector.active_labeler().config().choice, ModelChoice::Custom);
    }

    #[test]
    fn cleared_selection_falls_back_to_default() {
        let mut selector = selector();
        selector.select(Some(ModelChoice::Custom));
        assert_eq!(selector.select(None), ModelChoice::Default);
    }
}
