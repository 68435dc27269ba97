use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{button, column, container, image::Handle, pick_list, row, scrollable, text},
};

use crate::{
    acquisition::{self, PickOutcome},
    controller::LabelController,
    dispatch::{self, ClassifyOutcome, ClassifyRequest},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::layout,
    },
    labeling::LabelerSet,
    models::ModelChoice,
};

#[derive(Debug, Clone)]
pub struct LabelingScreen {
    controller: LabelController,
    preview: Option<Handle>,
}

#[derive(Debug, Clone)]
pub enum LabelingMessage {
    PickImage,
    ImagePicked(PickOutcome),
    ModelSelected(ModelChoice),
    Classified(ClassifyOutcome),
}

impl LabelingScreen {
    pub fn new(labelers: LabelerSet) -> Self {
        Self {
            controller: LabelController::new(labelers),
            preview: None,
        }
    }

    pub fn active_choice(&self) -> ModelChoice {
        self.controller.active_choice()
    }

    fn dispatch(request: Option<ClassifyRequest>) -> Task<ScreenMessage<Self>> {
        match request {
            Some(request) => Task::perform(dispatch::classify(request), |outcome| {
                ScreenMessage::ScreenMessage(LabelingMessage::Classified(outcome))
            }),
            None => Task::none(),
        }
    }
}

impl Screen for LabelingScreen {
    type Message = LabelingMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let controls = row![
            button("Select Image")
                .on_press(ScreenMessage::ScreenMessage(LabelingMessage::PickImage)),
            pick_list(
                ModelChoice::ALL,
                Some(self.controller.active_choice()),
                |choice| ScreenMessage::ScreenMessage(LabelingMessage::ModelSelected(choice)),
            ),
        ]
        .spacing(20);

        let preview: Element<'_, ScreenMessage<Self>> = match &self.preview {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::FillPortion(3))
                .into(),
            None => container(text("No image selected"))
                .center_x(Length::Fill)
                .center_y(Length::FillPortion(3))
                .into(),
        };

        let results = scrollable(text(self.controller.display_text()).size(16))
            .height(Length::FillPortion(2))
            .width(Length::Fill);

        let content = column![controls, preview, results]
            .spacing(20)
            .padding(20);

        layout(content, self.controller.phase())
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LabelingMessage::PickImage => Task::perform(acquisition::pick_image(), |outcome| {
                ScreenMessage::ScreenMessage(LabelingMessage::ImagePicked(outcome))
            }),
            LabelingMessage::ImagePicked(outcome) => {
                if let PickOutcome::Picked(Ok(picked)) = &outcome {
                    self.preview = Some(Handle::from_path(&picked.path));
                }
                Self::dispatch(self.controller.image_picked(outcome))
            }
            LabelingMessage::ModelSelected(choice) => {
                Self::dispatch(self.controller.select(Some(choice)))
            }
            LabelingMessage::Classified(outcome) => {
                self.controller.complete(outcome);
                Task::none()
            }
        }
    }
}
