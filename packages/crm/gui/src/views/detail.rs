use hcp_crm_core::list::detail_rows;
use hcp_crm_core::{Action, Operation};
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

use crate::app::{CrmApp, Message};
use crate::theme::{self, Colors};

/// Full record for the selected card, fetched on selection.
pub fn view_detail(app: &CrmApp) -> Element<'_, Message> {
    let list = &app.state.list;

    let heading = row![
        text("Interaction Details").size(18),
        Space::with_width(Length::Fill),
        button(text("Close").size(13))
            .padding([4, 12])
            .style(theme::secondary_button)
            .on_press(Message::Core(Action::CloseDetail)),
    ]
    .align_y(Alignment::Center);

    let body: Element<Message> = match (&list.detail_op, &list.detail) {
        (Operation::Pending(_), _) => app.spinner.with_label("Loading details..."),
        (Operation::Failed(error), _) => text(error.as_str()).size(14).color(Colors::ERROR).into(),
        (_, Some(record)) => Column::with_children(detail_rows(record).into_iter().map(|(label, value)| {
            column![
                text(label).size(12).color(Colors::TEXT_DIM),
                text(value).size(14),
            ]
            .spacing(2)
            .into()
        }))
        .spacing(10)
        .into(),
        (_, None) => Space::with_height(0).into(),
    };

    container(column![heading, body].spacing(16))
        .padding(20)
        .width(Length::Fill)
        .style(theme::detail_container)
        .into()
}
