use hcp_crm_core::types::Sentiment;
use hcp_crm_core::{Action, FormField, Status};
use iced::widget::{button, column, container, radio, row, text, text_editor, Row};
use iced::{Alignment, Element, Length};

use super::section;
use crate::app::{CrmApp, Message};
use crate::theme::{self, Colors};
use crate::widgets::labeled_input;

const ADD_SUCCESS_MESSAGE: &str = "Interaction logged successfully!";
const ADD_ERROR_FALLBACK: &str = "Failed to log interaction.";

pub fn view_entry_form(app: &CrmApp) -> Element<'_, Message> {
    row![
        container(view_details(app)).width(Length::FillPortion(3)),
        container(view_ai_assistant(app)).width(Length::FillPortion(2)),
    ]
    .spacing(24)
    .into()
}

fn form_input<'a>(
    app: &'a CrmApp,
    label: &'a str,
    placeholder: &'a str,
    field: FormField,
) -> Element<'a, Message> {
    labeled_input(
        label,
        placeholder,
        app.state.form.field(field),
        move |value| Message::Core(Action::EditField { field, value }),
        Message::Core(Action::SubmitForm),
    )
}

fn view_details(app: &CrmApp) -> Element<'_, Message> {
    let form = &app.state.form;

    let sentiment = Sentiment::ALL.iter().fold(Row::new().spacing(18), |row, choice| {
        row.push(
            radio(
                choice.label(),
                *choice,
                Some(form.hcp_sentiment),
                |picked| Message::Core(Action::EditSentiment(picked)),
            )
            .size(16)
            .text_size(14),
        )
    });

    section(
        column![
            text("Log HCP Interaction").size(18),
            row![
                form_input(app, "HCP Name *", "Search or select HCP...", FormField::HcpName),
                form_input(app, "Interaction Type", "e.g., Meeting, Call", FormField::InteractionType),
            ]
            .spacing(12),
            row![
                form_input(app, "Date *", "YYYY-MM-DD", FormField::Date),
                form_input(app, "Time *", "HH:MM", FormField::Time),
            ]
            .spacing(12),
            form_input(app, "Attendees", "Enter names or search...", FormField::Attendees),
            form_input(app, "Topics Discussed", "Enter key discussion points...", FormField::TopicsDiscussed),
            form_input(app, "Summary", "AI-generated or manual summary...", FormField::Summary),
            form_input(
                app,
                "Materials Shared / Samples Distributed",
                "Brochures, samples...",
                FormField::MaterialsShared
            ),
            column![
                text("Observed/Inferred HCP Sentiment").size(13).color(Colors::TEXT_DIM),
                sentiment,
            ]
            .spacing(8),
            form_input(app, "Outcomes", "Key outcomes or agreements...", FormField::Outcomes),
            form_input(
                app,
                "Follow-up Actions",
                "Enter next steps or tasks...",
                FormField::FollowUpActions
            ),
            view_submit_row(app),
        ]
        .spacing(14),
    )
}

fn view_submit_row(app: &CrmApp) -> Element<'_, Message> {
    let store = &app.state.store;
    let submitting = store.add_status() == Status::Loading;

    let submit = button(text(if submitting { "Logging..." } else { "Log Interaction" }).size(14))
        .padding([8, 18])
        .style(theme::primary_button)
        .on_press_maybe((!submitting).then_some(Message::Core(Action::SubmitForm)));

    let outcome: Element<Message> = match store.add_status() {
        Status::Succeeded => text(ADD_SUCCESS_MESSAGE).size(14).color(Colors::SUCCESS).into(),
        Status::Failed => text(format!(
            "Error: {}",
            store.add_error().unwrap_or(ADD_ERROR_FALLBACK)
        ))
        .size(14)
        .color(Colors::ERROR)
        .into(),
        Status::Loading => app.spinner.view(),
        Status::Idle => text("").into(),
    };

    row![submit, outcome]
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
}

fn view_ai_assistant(app: &CrmApp) -> Element<'_, Message> {
    let form = &app.state.form;
    let processing = form.is_processing();

    let mut editor = text_editor(&app.notes)
        .placeholder("Paste or type interaction notes here...")
        .height(Length::Fixed(260.0))
        .padding(10);
    if !processing {
        editor = editor.on_action(Message::NotesEdited);
    }

    let process = button(
        text(if processing { "Processing..." } else { "Process Notes with AI" }).size(14),
    )
    .padding([8, 18])
    .style(theme::primary_button)
    .on_press_maybe((!processing).then_some(Message::Core(Action::ProcessNotes)));

    let mut content = column![
        text("AI Assistant").size(18),
        text("Paste raw notes and let the assistant pre-fill the form.")
            .size(13)
            .color(Colors::TEXT_DIM),
        editor,
    ]
    .spacing(12);

    content = if processing {
        content.push(row![process, app.spinner.view()].spacing(12).align_y(Alignment::Center))
    } else {
        content.push(process)
    };

    if let Some(error) = &form.ai_error {
        content = content.push(text(error.as_str()).size(13).color(Colors::ERROR));
    }

    section(content)
}
