use iced::{
    Element, Task,
    widget::{container, text},
};

use crate::{
    config::Settings,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
    labeling::LabelerSet,
};

/// Shown while both labelers load
#[derive(Debug, Clone, Default)]
pub struct LoadingPageScreen {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LoadingPageMessage {
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum LoadingParentMessage {
    ModelsLoaded(LabelerSet),
}

impl LoadingPageScreen {
    /// Load both labelers off the UI thread
    pub fn load(settings: &Settings) -> Task<ScreenMessage<Self>> {
        let default = settings.default.clone();
        let custom = settings.custom.clone();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || LabelerSet::load(default, custom)).await
            },
            |result| match result {
                Ok(labelers) => {
                    ScreenMessage::ParentMessage(LoadingParentMessage::ModelsLoaded(labelers))
                }
                Err(e) => ScreenMessage::ScreenMessage(LoadingPageMessage::Failed(e.to_string())),
            },
        )
    }
}

impl Screen for LoadingPageScreen {
    type Message = LoadingPageMessage;
    type ParentMessage = LoadingParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let status = match &self.error {
            Some(e) => text(format!("Failed to load models: {e}")),
            None => text("Loading models..."),
        };

        container(status)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoadingPageMessage::Failed(e) => {
                tracing::error!(error = %e, "Model loading task failed");
                self.error = Some(e);
                Task::none()
            }
        }
    }
}
