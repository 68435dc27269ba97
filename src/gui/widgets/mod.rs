use iced::{
    Color, Element, Theme, border,
    widget::{column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::controller::Phase;

const PHASES: [(Phase, &str); 5] = [
    (Phase::Idle, "Idle"),
    (Phase::ImageSelected, "Image Selected"),
    (Phase::Classifying, "Classifying"),
    (Phase::ResultShown, "Result"),
    (Phase::ErrorShown, "Error"),
];

/// Darken the entry for the current phase
fn phase_style(current: Phase, phase: Phase) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme).border(border::width(2));
        if current == phase {
            let mut color_rgba = theme.palette().background.into_rgba8();
            color_rgba[0] /= 2;
            color_rgba[1] /= 2;
            color_rgba[2] /= 2;
            style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
        } else {
            style.background(theme.palette().background)
        }
    }
}

/// Phase sidebar on the left, main content on the right
pub fn layout<'a, Message>(
    main_content: impl Into<Element<'a, Message>>,
    current: Phase,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let sidebar = PHASES.iter().fold(column![].spacing(4), |col, (phase, name)| {
        col.push(
            container(text(*name))
                .style(phase_style(current, *phase))
                .padding(10)
                .width(iced::Length::Fill),
        )
    });

    container(row![
        container(sidebar).width(iced::Length::FillPortion(1)).padding(10),
        container(main_content.into()).width(iced::Length::FillPortion(4)),
    ])
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}
