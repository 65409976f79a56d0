use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Border, Element, Length, Theme};

use super::card;
use crate::state::Workspace;
use crate::Message;

/// Body of the onboarding "Enter Project Title" dialog
pub fn title_dialog(workspace: &Workspace) -> Element<'_, Message> {
    card(
        column![
            text("Enter Project Title").size(20),
            text_input("Enter Project Title", workspace.title.title())
                .on_input(Message::TitleChanged)
                .on_submit(Message::TitleConfirmed)
                .padding(8),
            button(text("Add Project"))
                .style(button::primary)
                .padding([8, 16])
                .on_press(Message::TitleConfirmed),
        ]
        .spacing(12),
    )
}

/// Body of the "Upload Images" dialog
pub fn upload_dialog(workspace: &Workspace) -> Element<'_, Message> {
    let upload = &workspace.upload;

    let status = if upload.is_loading() {
        "Reading files...".to_string()
    } else {
        match upload.staged().len() {
            0 => "No files selected".to_string(),
            1 => "1 file selected".to_string(),
            n => format!("{} files selected", n),
        }
    };

    let drop_zone = container(
        column![
            text("Click Browse or drag files onto this window"),
            button(text("Browse...")).style(button::secondary).on_press(Message::BrowseFiles),
            text(status).size(14),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .center_x(Length::Fill)
    .style(|theme: &Theme| container::Style {
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    });

    let actions = row![
        Space::with_width(Length::Fill),
        button(text("Cancel")).style(button::secondary).on_press(Message::CancelUpload),
        button(text("Add to tray"))
            .style(button::primary)
            .on_press_maybe((!upload.is_loading()).then_some(Message::ConfirmUpload)),
    ]
    .spacing(8);

    card(column![text("Upload Images").size(20), drop_zone, actions].spacing(16))
}
