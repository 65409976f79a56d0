use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::state::data::Screenshot;

/// Form field carrying the prompt text
pub const PROMPT_FIELD: &str = "prompt";
/// Form field repeated once per screenshot
pub const IMAGES_FIELD: &str = "images";

/// One file part of the generation request
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn from_screenshot(shot: &Screenshot) -> Self {
        Self {
            file_name: shot.name.clone(),
            mime: guess_mime(&shot.name),
            bytes: shot.bytes.clone(),
        }
    }
}

/// Everything sent with one submission
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub images: Vec<Attachment>,
}

impl GenerationRequest {
    /// Snapshot the prompt and the tray, in tray order
    pub fn new(prompt: &str, images: &[Screenshot]) -> Self {
        Self {
            prompt: prompt.to_string(),
            images: images.iter().map(Attachment::from_screenshot).collect(),
        }
    }

    /// Build the multipart body: `prompt` first, then one `images` part per file
    pub fn into_form(self) -> reqwest::Result<Form> {
        let mut form = Form::new().text(PROMPT_FIELD, self.prompt);

        for image in self.images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(image.mime)?;
            form = form.part(IMAGES_FIELD, part);
        }

        Ok(form)
    }
}

/// Content type for a file name, based on its extension
pub fn guess_mime(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_has_no_image_parts() {
        let request = GenerationRequest::new("", &[]);

        assert_eq!(request.prompt, "");
        assert!(request.images.is_empty());
    }

    #[test]
    fn test_request_keeps_tray_order_and_duplicates() {
        let tray = vec![
            Screenshot::new("b.PNG", vec![2]),
            Screenshot::new("a.jpg", vec![1]),
            Screenshot::new("b.PNG", vec![2]),
        ];

        let request = GenerationRequest::new("check login", &tray);

        let names: Vec<_> = request.images.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.PNG", "a.jpg", "b.PNG"]);
        assert_eq!(request.images[0].mime, "image/png");
        assert_eq!(request.images[1].mime, "image/jpeg");
    }

    #[test]
    fn test_guess_mime_falls_back() {
        assert_eq!(guess_mime("screen.webp"), "image/webp");
        assert_eq!(guess_mime("notes"), "application/octet-stream");
        assert_eq!(guess_mime("archive.zip"), "application/octet-stream");
    }
}
