use iced::widget::{column, text, text_input};
use iced::{Element, Length};

use crate::theme;

/// Single-line form input with a caption above it. Enter submits.
pub fn labeled_input<'a, Message>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .on_submit(on_submit)
        .size(14)
        .padding(10)
        .style(theme::input_style);

    column![text(label).size(13).color(theme::Colors::TEXT_DIM), input]
        .spacing(6)
        .width(Length::Fill)
        .into()
}
