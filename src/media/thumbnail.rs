use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};

/// Longest edge of a decoded thumbnail (tray tiles are 100px, kept sharp on HiDPI)
pub const THUMBNAIL_SIZE: u32 = 200;

/// Decode and downscale an image, keeping its aspect ratio
/// Returns None when the bytes are not an image format we can read
pub fn decode_thumbnail(bytes: &[u8]) -> Option<RgbaImage> {
    let img = image::load_from_memory(bytes).ok()?;
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    Some(thumbnail.to_rgba8())
}

/// Build the display handle for a screenshot
pub fn generate_thumbnail(bytes: &[u8]) -> Option<Handle> {
    let thumbnail = decode_thumbnail(bytes)?;
    let (width, height) = thumbnail.dimensions();
    Some(Handle::from_rgba(width, height, thumbnail.into_raw()))
}
