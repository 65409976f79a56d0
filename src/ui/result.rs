use iced::widget::{column, container, markdown, row, Space};
use iced::{Border, Element, Length, Theme};

use crate::Message;

/// Placeholder shown while a generation request is in flight
pub fn skeleton<'a>() -> Element<'a, Message> {
    let paragraph = |rows: usize| {
        let mut block = column![].spacing(10);
        for i in 0..rows {
            // Last line of each paragraph is shorter, like real text
            let width = if i + 1 == rows { 380.0 } else { 600.0 };
            block = block.push(bar(width, 14.0, 4.0));
        }
        block
    };

    column![
        row![bar(40.0, 40.0, 20.0), paragraph(4)].spacing(12),
        container(column![paragraph(4), paragraph(4)].spacing(24)).padding([0, 50]),
    ]
    .spacing(24)
    .padding(10)
    .into()
}

fn bar<'a>(width: f32, height: f32, radius: f32) -> Element<'a, Message> {
    container(Space::new(Length::Fixed(width), Length::Fixed(height)))
        .style(move |theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Rendered generation result; link clicks come back as messages
pub fn rendered<'a>(items: &'a [markdown::Item], theme: &Theme) -> Element<'a, Message> {
    markdown::view(
        items,
        markdown::Settings::default(),
        markdown::Style::from_palette(theme.palette()),
    )
    .map(Message::LinkClicked)
}
