pub mod labeling;
pub mod loading_page;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LoadingPage(loading_page::LoadingPageScreen),
    Labeling(labeling::LabelingScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;
    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::LoadingPage(screen) => screen.view().map(Message::LoadingPage),
            ScreenData::Labeling(screen) => screen.view().map(Message::Labeling),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (
                x,
                Message::LoadingPage(ScreenMessage::ParentMessage(
                    loading_page::LoadingParentMessage::ModelsLoaded(labelers),
                )),
            ) => {
                *x = ScreenData::Labeling(labeling::LabelingScreen::new(labelers));
                Task::none()
            }
            (
                ScreenData::LoadingPage(page),
                Message::LoadingPage(ScreenMessage::ScreenMessage(msg)),
            ) => page
                .update(msg, state)
                .map(Message::LoadingPage)
                .map(ScreenMessage::ScreenMessage),
            (ScreenData::Labeling(page), Message::Labeling(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Labeling)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            _ => Task::none(),
        }
    }
}
