use hcp_crm_core::list::{list_content, InteractionCard, ListContent, EMPTY_LIST_MESSAGE};
use hcp_crm_core::types::InteractionId;
use hcp_crm_core::{Action, Status};
use iced::widget::{button, column, row, text, Column, Space};
use iced::{Alignment, Element, Length};

use super::section;
use crate::app::{CrmApp, Message};
use crate::theme::{self, Colors};

pub fn view_interaction_list(app: &CrmApp) -> Element<'_, Message> {
    let fetching = app.state.store.status() == Status::Loading;

    let refresh = button(text("Refresh").size(13))
        .padding([6, 14])
        .style(theme::secondary_button)
        .on_press_maybe((!fetching).then_some(Message::Core(Action::Refresh)));

    let heading = row![
        text("Logged Interactions").size(18),
        Space::with_width(Length::Fill),
        refresh,
    ]
    .align_y(Alignment::Center);

    let body: Element<Message> = match list_content(&app.state) {
        ListContent::Idle => Space::with_height(0).into(),
        ListContent::Loading => app.spinner.with_label("Loading interactions..."),
        ListContent::Empty => text(EMPTY_LIST_MESSAGE).size(14).color(Colors::TEXT_DIM).into(),
        ListContent::Error(message) => text(message).size(14).color(Colors::ERROR).into(),
        ListContent::Cards(cards) => {
            let selected = app.state.list.selected.as_ref();
            Column::with_children(
                cards
                    .into_iter()
                    .map(|card| view_card(card, selected)),
            )
            .spacing(12)
            .into()
        }
    };

    section(column![heading, body].spacing(16))
}

fn view_card<'a>(card: InteractionCard, selected: Option<&InteractionId>) -> Element<'a, Message> {
    let is_selected = selected == Some(&card.id);

    let mut content = column![
        row![
            text(card.hcp_name).size(16),
            Space::with_width(Length::Fill),
            text(card.interaction_type).size(13).color(Colors::PRIMARY),
        ]
        .align_y(Alignment::Center),
        text(card.when).size(13).color(Colors::TEXT_DIM),
    ]
    .spacing(6);

    for (label, value) in [
        ("Topics", card.topics),
        ("Attendees", card.attendees),
        ("Outcomes", card.outcomes),
    ] {
        if let Some(value) = value {
            content = content.push(
                row![
                    text(format!("{}:", label)).size(13).color(Colors::TEXT_DIM),
                    text(value).size(13),
                ]
                .spacing(6),
            );
        }
    }

    let sentiment_color = theme::sentiment_color(&card.sentiment);
    content = content.push(
        row![
            text("Sentiment:").size(13).color(Colors::TEXT_DIM),
            text(card.sentiment).size(13).color(sentiment_color),
        ]
        .spacing(6),
    );

    button(content)
        .width(Length::Fill)
        .padding(14)
        .style(if is_selected {
            theme::selected_card_button
        } else {
            theme::card_button
        })
        .on_press(Message::Core(Action::SelectInteraction(card.id)))
        .into()
}
