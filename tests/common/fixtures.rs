use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use image::{DynamicImage, ImageBuffer, Rgb};
use pixlabel::{
    ClassificationError, ClassifyOutcome, ClassifyRequest, Label, LabelResult, Labeler,
    LabelerConfig, LabelerSet, ModelChoice, PickOutcome, PickedImage, load_image,
};
use tempfile::NamedTempFile;

/// Labeler returning a canned result and counting how often it ran
#[derive(Debug)]
pub struct FakeLabeler {
    config: LabelerConfig,
    result: Result<LabelResult, ClassificationError>,
    calls: AtomicUsize,
}

impl FakeLabeler {
    pub fn new(choice: ModelChoice, result: Result<LabelResult, ClassificationError>) -> Self {
        let config = LabelerConfig::new(choice, "fake.rten".into(), "fake-labels.txt".into());
        Self {
            config,
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Labeler for FakeLabeler {
    fn config(&self) -> &LabelerConfig {
        &self.config
    }

    fn label(&self, _image: &DynamicImage) -> Result<LabelResult, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// `[Cat 0.9, Table 0.6]` from the default model
pub fn default_labels() -> LabelResult {
    vec![Label::new("Cat", 0.9, 0), Label::new("Table", 0.6, 1)]
}

/// `[Cat 0.55]` from the custom model
pub fn custom_labels() -> LabelResult {
    vec![Label::new("Cat", 0.55, 0)]
}

/// Default and custom fakes plus the set holding them
pub fn make_labelers() -> (Arc<FakeLabeler>, Arc<FakeLabeler>, LabelerSet) {
    let default = Arc::new(FakeLabeler::new(ModelChoice::Default, Ok(default_labels())));
    let custom = Arc::new(FakeLabeler::new(ModelChoice::Custom, Ok(custom_labels())));
    let set = LabelerSet::new(default.clone(), custom.clone());
    (default, custom, set)
}

/// Creates a 100x100 red test image and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// A decoded test image; keep the temp file alive while the image is in use
pub fn make_picked_image() -> (PickedImage, NamedTempFile) {
    let file = create_test_image();
    let picked = load_image(file.path()).expect("Failed to load test image");
    (picked, file)
}

pub fn picked(image: PickedImage) -> PickOutcome {
    PickOutcome::Picked(Ok(image))
}

/// Run a request synchronously, the way the dispatcher would on a worker
pub fn run_request(request: &ClassifyRequest) -> ClassifyOutcome {
    ClassifyOutcome {
        id: request.id,
        result: request.labeler.label(&request.image),
    }
}
