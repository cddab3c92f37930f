use hcp_crm_core::{Action, BackendStatus};
use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::app::{CrmApp, Message};
use crate::theme::{self, Colors};

pub fn view_header(app: &CrmApp) -> Element<'_, Message> {
    let (status_text, status_color) = match &app.state.backend {
        BackendStatus::Unknown => ("Backend: unknown".to_string(), Colors::TEXT_DIM),
        BackendStatus::Checking => ("Backend: checking...".to_string(), Colors::TEXT_DIM),
        BackendStatus::Online(message) => (format!("Backend: {}", message), Colors::SUCCESS),
        BackendStatus::Unreachable(reason) => (format!("Backend: {}", reason), Colors::ERROR),
    };

    let recheck = button(text("Check").size(12))
        .padding([4, 10])
        .style(theme::secondary_button)
        .on_press_maybe(
            (app.state.backend != BackendStatus::Checking)
                .then_some(Message::Core(Action::CheckBackend)),
        );

    let toggle_form = if app.state.form_visible {
        button(text("Hide Form").size(13))
            .style(theme::secondary_button)
            .on_press(Message::Core(Action::HideEntryForm))
    } else {
        button(text("Log Interaction").size(13))
            .style(theme::primary_button)
            .on_press(Message::Core(Action::ShowEntryForm))
    };

    container(
        row![
            text("AI-Powered CRM: HCP Interactions").size(20),
            Space::with_width(Length::Fill),
            text(status_text).size(12).color(status_color),
            recheck,
            toggle_form.padding([6, 14]),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([14, 24])
    .width(Length::Fill)
    .style(theme::header_container)
    .into()
}
