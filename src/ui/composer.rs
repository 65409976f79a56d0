use iced::widget::{button, column, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use super::{card, CONTENT_WIDTH};
use crate::state::Workspace;
use crate::Message;

/// Prompt row: template picker button, input with upload button, submit
pub fn composer_row(workspace: &Workspace) -> Element<'_, Message> {
    let busy = workspace.submission.is_submitting();

    let templates = button(text("AI Prompts"))
        .style(button::secondary)
        .padding([8, 12])
        .on_press(Message::OpenTemplates);

    let input = text_input("Type your message...", workspace.composer.input())
        .on_input(Message::PromptChanged)
        .on_submit(Message::Submit)
        .padding(8)
        .width(Length::Fill);

    let upload = button(text("+").size(18))
        .style(button::text)
        .padding([4, 10])
        .on_press(Message::OpenUpload);

    // Disabled while a request is in flight
    let submit = button(text(if busy { "Submitting..." } else { "Submit" }))
        .style(button::primary)
        .padding([8, 16])
        .on_press_maybe((!busy).then_some(Message::Submit));

    row![templates, input, upload, submit]
        .spacing(8)
        .align_y(Alignment::Center)
        .width(Length::Fixed(CONTENT_WIDTH))
        .into()
}

/// Body of the "Select a Prompt" dialog
pub fn template_picker(workspace: &Workspace) -> Element<'_, Message> {
    let choices: Vec<Element<'_, Message>> = workspace
        .composer
        .templates()
        .iter()
        .map(|template| {
            button(text(*template))
                .style(button::secondary)
                .width(Length::Fill)
                .padding(10)
                .on_press(Message::TemplateChosen(*template))
                .into()
        })
        .collect();

    card(
        column![
            text("Select a Prompt").size(20),
            Column::with_children(choices).spacing(8),
        ]
        .spacing(16),
    )
}
