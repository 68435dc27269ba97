pub mod acquisition;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod labeling;
pub mod logging;
pub mod models;

pub use acquisition::{PickOutcome, PickedImage, load_image};
pub use config::Settings;
pub use controller::{LabelController, Phase};
pub use dispatch::{ClassifyOutcome, ClassifyRequest, classify};
pub use error::{ClassificationError, ImageDecodeError};
pub use format::format_labels;
pub use labeling::{Labeler, LabelerConfig, LabelerSet, ModelSelector};
pub use models::{Label, LabelResult, ModelChoice};

#[cfg(feature = "gui")]
pub mod gui;
