//! Screen state for the labeling view.
//!
//! [`LabelController`] owns the active model, the current image and the text
//! shown to the user. Every event handler returns the classification request
//! to run, if any, so the GUI only has to dispatch it and feed the outcome back
//! through [`LabelController::complete`].

use tracing::{debug, info, warn};

use crate::{
    acquisition::{PickOutcome, PickedImage},
    dispatch::{ClassifyOutcome, ClassifyRequest, RequestId},
    format::format_labels,
    labeling::{LabelerSet, ModelSelector},
    models::ModelChoice,
};

pub const PROCESSING_TEXT: &str = "Processing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageSelected,
    Classifying,
    ResultShown,
    ErrorShown,
}

#[derive(Debug, Clone)]
pub struct LabelController {
    selector: ModelSelector,
    current_image: Option<PickedImage>,
    display_text: String,
    phase: Phase,
    next_request: RequestId,
    /// Only the outcome of this request may update the display
    pending: Option<RequestId>,
}

impl LabelController {
    pub fn new(labelers: LabelerSet) -> Self {
        Self {
            selector: ModelSelector::new(labelers),
            current_image: None,
            display_text: String::new(),
            phase: Phase::Idle,
            next_request: 1,
            pending: None,
        }
    }

    /// Dropdown changed. Re-classifies the current image with the new model if there is one.
    pub fn select(&mut self, option: Option<ModelChoice>) -> Option<ClassifyRequest> {
        self.selector.select(option);
        if self.current_image.is_some() {
            self.begin_classification()
        } else {
            None
        }
    }

    /// The picker finished. Cancellation changes nothing.
    pub fn image_picked(&mut self, outcome: PickOutcome) -> Option<ClassifyRequest> {
        match outcome {
            PickOutcome::Cancelled => None,
            PickOutcome::Picked(Ok(picked)) => {
                info!(path = %picked.path.display(), "Image selected");
                self.current_image = Some(picked);
                self.phase = Phase::ImageSelected;
                self.begin_classification()
            }
            PickOutcome::Picked(Err(e)) => {
                warn!(error = %e, "Picked image could not be decoded");
                self.pending = None;
                self.display_text = format!("Error: {e}");
                self.phase = Phase::ErrorShown;
                None
            }
        }
    }

    /// Apply a finished classification. Returns false when the outcome was superseded.
    pub fn complete(&mut self, outcome: ClassifyOutcome) -> bool {
        if self.pending != Some(outcome.id) {
            debug!(id = outcome.id, "Ignoring superseded classification");
            return false;
        }
        self.pending = None;

        match outcome.result {
            Ok(labels) => {
                self.display_text = format_labels(&labels);
                self.phase = Phase::ResultShown;
            }
            Err(e) => {
                self.display_text = format!("Error: {e}");
                self.phase = Phase::ErrorShown;
            }
        }
        true
    }

    fn begin_classification(&mut self) -> Option<ClassifyRequest> {
        let image = self.current_image.as_ref()?.image.clone();

        let id = self.next_request;
        self.next_request += 1;
        self.pending = Some(id);
        self.display_text = PROCESSING_TEXT.to_string();
        self.phase = Phase::Classifying;

        Some(ClassifyRequest {
            id,
            labeler: self.selector.active_labeler(),
            image,
        })
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_image(&self) -> Option<&PickedImage> {
        self.current_image.as_ref()
    }

    pub fn active_choice(&self) -> ModelChoice {
        self.selector.active_choice()
    }

    pub fn is_classifying(&self) -> bool {
        self.pending.is_some()
    }
}
