use iced::{Element, Task};

use super::{AppState, Message};
use crate::config::Settings;
use crate::gui::screens::{Screen, ScreenData, ScreenMessage, loading_page::LoadingPageScreen};

pub struct PixlabelApp {
    state: AppState,
    screen: ScreenData,
}

impl PixlabelApp {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let state = AppState::new(settings);
        let load = LoadingPageScreen::load(&state.settings).map(Message::LoadingPage);
        (
            Self {
                state,
                screen: ScreenData::LoadingPage(LoadingPageScreen::default()),
            },
            load,
        )
    }

    pub fn title(&self) -> String {
        match &self.screen {
            ScreenData::Labeling(screen) => format!("Pixlabel - {}", screen.active_choice()),
            ScreenData::LoadingPage(_) => "Pixlabel".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(into_app_message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(into_app_message)
    }
}

fn into_app_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

/// Open the labeling window
pub fn run(settings: Settings) -> iced::Result {
    iced::application(
        move || PixlabelApp::new(settings.clone()),
        PixlabelApp::update,
        PixlabelApp::view,
    )
    .title(PixlabelApp::title)
    .run()
}
