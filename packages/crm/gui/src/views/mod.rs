mod detail;
mod entry_form;
mod header;
mod interaction_list;
mod notice;

use iced::widget::{column, container, horizontal_rule, row, scrollable, Column, Stack};
use iced::{Element, Length};

use crate::app::{CrmApp, Message};
use crate::theme;

pub fn view_root(app: &CrmApp) -> Element<'_, Message> {
    let mut body = Column::new().spacing(24).padding(24);

    if app.state.form_visible {
        body = body
            .push(entry_form::view_entry_form(app))
            .push(horizontal_rule(1));
    }

    let list_area: Element<Message> = match app.state.list.selected {
        Some(_) => row![
            container(interaction_list::view_interaction_list(app)).width(Length::FillPortion(3)),
            container(detail::view_detail(app)).width(Length::FillPortion(2)),
        ]
        .spacing(24)
        .into(),
        None => interaction_list::view_interaction_list(app),
    };
    body = body.push(list_area);

    let page = container(column![
        header::view_header(app),
        scrollable(body).height(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill);

    match &app.state.notice {
        Some(message) => Stack::new()
            .push(page)
            .push(notice::view_notice(message))
            .into(),
        None => page.into(),
    }
}

/// Rounded surface behind each page section.
fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(theme::section_container)
        .into()
}
