mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from pixlabel for tests
pub use pixlabel::{
    ClassificationError, ClassifyOutcome, ClassifyRequest, Label, LabelController, LabelResult,
    Labeler, LabelerConfig, LabelerSet, ModelChoice, Phase, PickOutcome, PickedImage,
};
