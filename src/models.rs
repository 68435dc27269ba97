use std::fmt;

/// A single category returned by a labeler
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub confidence: f32,
    /// Index of the category in the model's output
    pub index: usize,
}

impl Label {
    pub fn new(text: impl Into<String>, confidence: f32, index: usize) -> Self {
        Self {
            text: text.into(),
            confidence,
            index,
        }
    }
}

/// Ordered labels as returned by a classification, highest confidence first
pub type LabelResult = Vec<Label>;

/// Which of the two labelers is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelChoice {
    #[default]
    Default,
    Custom,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [ModelChoice::Default, ModelChoice::Custom];
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelChoice::Default => write!(f, "Default Model"),
            ModelChoice::Custom => write!(f, "Custom Model"),
        }
    }
}

impl std::str::FromStr for ModelChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(ModelChoice::Default),
            "custom" => Ok(ModelChoice::Custom),
            other => Err(format!("unknown model '{other}', expected 'default' or 'custom'")),
        }
    }
}
