use crate::gui::screens::{
    ScreenMessage, labeling::LabelingScreen, loading_page::LoadingPageScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    Labeling(ScreenMessage<LabelingScreen>),
}
