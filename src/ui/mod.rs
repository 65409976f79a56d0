/// View composition for the workspace window
///
/// - `composer.rs` - prompt row and template picker
/// - `tray.rs` - side panel with screenshot thumbnails
/// - `result.rs` - loading skeleton and rendered markdown
/// - `dialogs.rs` - title and upload modals
/// - `notices.rs` - transient notifications

pub mod composer;
pub mod dialogs;
pub mod notices;
pub mod result;
pub mod tray;

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Border, Color, Element, Length, Theme};

use crate::Message;

/// Fixed width of the main column (result area and composer row)
pub const CONTENT_WIDTH: f32 = 700.0;

/// Layer `content` over `base` behind a dimmed backdrop
/// Clicking the backdrop emits `on_blur`
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(Color { a: 0.45, ..Color::BLACK }.into()),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// White card used for dialog bodies
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(520.0))
        .padding(24)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.palette().background.into()),
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}
