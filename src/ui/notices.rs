use iced::widget::{container, text, Column};
use iced::{Border, Color, Element, Length, Theme};

use crate::state::notice::{Notice, NoticeKind};
use crate::Message;

/// Notices stacked at the top center of the window
pub fn notice_stack(notices: &[Notice]) -> Element<'_, Message> {
    let items: Vec<Element<'_, Message>> = notices.iter().map(notice).collect();

    container(Column::with_children(items).spacing(8))
        .padding(16)
        .center_x(Length::Fill)
        .into()
}

fn notice(notice: &Notice) -> Element<'_, Message> {
    let kind = notice.kind;

    container(text(&notice.text).color(Color::WHITE))
        .padding([8, 16])
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let background = match kind {
                NoticeKind::Success => palette.success.base.color,
                NoticeKind::Error => palette.danger.base.color,
            };
            container::Style {
                background: Some(background.into()),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}
