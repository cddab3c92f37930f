use hcp_crm_core::Action;
use iced::widget::{button, column, container, opaque, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::theme;

/// Modal notice. `opaque` swallows input to everything underneath until the
/// user dismisses it.
pub fn view_notice(message: &str) -> Element<'_, Message> {
    let dialog = container(
        column![
            text(message).size(14),
            button(text("OK").size(14))
                .padding([6, 18])
                .style(theme::primary_button)
                .on_press(Message::Core(Action::DismissNotice)),
        ]
        .spacing(16)
        .align_x(Alignment::End),
    )
    .padding(24)
    .max_width(420.0)
    .style(theme::dialog_container);

    opaque(
        container(dialog)
            .center(Length::Fill)
            .style(theme::backdrop),
    )
}
