use crate::config::Settings;

/// State shared by every screen
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
