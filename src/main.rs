use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pixlabel::labeling::config::{
    CUSTOM_LABELS_PATH, CUSTOM_MODEL_PATH, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_INPUT_SIZE,
    DEFAULT_MAX_RESULTS,
};
use pixlabel::labeling::engine;
use pixlabel::{
    ClassifyRequest, LabelerConfig, ModelChoice, Settings, classify, format_labels, load_image,
    logging,
};

#[derive(Parser)]
#[command(name = "pixlabel")]
#[command(about = "Label images with an on-device classification model")]
struct Cli {
    /// Classify this image and print the labels instead of opening the window
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Model used for IMAGE (default or custom)
    #[arg(long, default_value = "default")]
    model: ModelChoice,

    /// Default model file (defaults to ~/.cache/pixlabel/default.rten)
    #[arg(long, value_name = "FILE")]
    default_model: Option<PathBuf>,

    /// Labels for the default model, one per line
    #[arg(long, value_name = "FILE")]
    default_labels: Option<PathBuf>,

    /// Bundled custom model file
    #[arg(long, value_name = "FILE", default_value = CUSTOM_MODEL_PATH)]
    custom_model: PathBuf,

    /// Labels for the custom model, one per line
    #[arg(long, value_name = "FILE", default_value = CUSTOM_LABELS_PATH)]
    custom_labels: PathBuf,

    /// Minimum confidence for labels from the custom model
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    custom_threshold: f32,

    /// Maximum number of labels shown per image
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Side length of the square model input
    #[arg(long, default_value_t = DEFAULT_INPUT_SIZE)]
    input_size: u32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<Settings> {
        let default = match (&self.default_model, &self.default_labels) {
            (Some(model), Some(labels)) => {
                LabelerConfig::new(ModelChoice::Default, model.clone(), labels.clone())
            }
            (model, labels) => {
                let mut config = LabelerConfig::default_options()?;
                if let Some(model) = model {
                    config = config.with_model_path(model);
                }
                if let Some(labels) = labels {
                    config = config.with_labels_path(labels);
                }
                config
            }
        };

        let custom = LabelerConfig::custom(&self.custom_model, &self.custom_labels)
            .with_confidence_threshold(self.custom_threshold);

        Ok(Settings {
            default: default
                .with_max_results(self.max_results)
                .with_input_size(self.input_size),
            custom: custom
                .with_max_results(self.max_results)
                .with_input_size(self.input_size),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Logging disabled: {e}");
    }

    let settings = args.settings()?;

    match &args.image_path {
        Some(path) => run_headless(&settings, args.model, path),
        None => run_gui(settings),
    }
}

fn run_headless(settings: &Settings, choice: ModelChoice, path: &Path) -> anyhow::Result<()> {
    let picked = load_image(path)?;

    let config = match choice {
        ModelChoice::Default => settings.default.clone(),
        ModelChoice::Custom => settings.custom.clone(),
    };
    let labeler = Arc::new(engine::init_labeler(config)?);

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(classify(ClassifyRequest {
        id: 1,
        labeler,
        image: picked.image,
    }));

    let labels = outcome.result.map_err(|e| anyhow::anyhow!("Error: {e}"))?;
    if labels.is_empty() {
        println!("No labels above the confidence threshold.");
    } else {
        print!("{}", format_labels(&labels));
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(settings: Settings) -> anyhow::Result<()> {
    pixlabel::gui::run(settings).map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_settings: Settings) -> anyhow::Result<()> {
    anyhow::bail!("Built without the `gui` feature; pass an IMAGE to classify")
}
