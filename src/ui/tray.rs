use iced::widget::{button, column, container, image, stack, text, Column, Row};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::Screenshot;
use crate::state::Workspace;
use crate::Message;

/// Thumbnails per grid row
const GRID_COLUMNS: usize = 3;
/// Edge length of one thumbnail tile
const TILE_SIZE: f32 = 100.0;

/// Side panel listing the screenshots that will be submitted
pub fn side_panel(workspace: &Workspace) -> Element<'_, Message> {
    let images = workspace.tray.images();

    let rows: Vec<Element<'_, Message>> = images
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row_index, chunk)| {
            let tiles: Vec<Element<'_, Message>> = chunk
                .iter()
                .enumerate()
                .map(|(offset, shot)| tile(row_index * GRID_COLUMNS + offset, shot))
                .collect();
            Row::with_children(tiles).spacing(16).into()
        })
        .collect();

    let mut content = column![].spacing(16);
    if !workspace.tray.is_empty() {
        content = content.push(text("Uploaded Images").size(18));
    }
    content = content.push(Column::with_children(rows).spacing(16));

    container(content)
        .width(Length::Fixed(300.0))
        .height(Length::Fill)
        .padding(24)
        .into()
}

/// One thumbnail with its remove control in the top-right corner
fn tile(index: usize, shot: &Screenshot) -> Element<'_, Message> {
    let picture: Element<'_, Message> = match &shot.thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .content_fit(ContentFit::Cover)
            .into(),
        // Undecodable file: show its name instead
        None => container(text(&shot.name).size(11))
            .padding(6)
            .center_x(Length::Fixed(TILE_SIZE))
            .center_y(Length::Fixed(TILE_SIZE))
            .style(container::rounded_box)
            .into(),
    };

    let remove = button(text("×").size(12))
        .style(button::secondary)
        .padding([0, 6])
        .on_press(Message::RemoveImage(index));

    let corner = container(remove)
        .width(Length::Fill)
        .align_x(Alignment::End);

    container(stack![picture, corner])
        .width(Length::Fixed(TILE_SIZE))
        .height(Length::Fixed(TILE_SIZE))
        .into()
}
