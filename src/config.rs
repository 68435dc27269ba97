use crate::labeling::LabelerConfig;

/// Startup settings handed from the command line to the GUI
#[derive(Debug, Clone)]
pub struct Settings {
    pub default: LabelerConfig,
    pub custom: LabelerConfig,
}
