/// Shared data structures for the workspace state
///
/// These structs represent the data model that flows between
/// the file loading layer, the HTTP layer and the UI layer.

use iced::widget::image::Handle;

/// A single screenshot held in the tray or in the upload staging area
///
/// Screenshots have no identity: two entries may hold identical bytes.
#[derive(Debug, Clone)]
pub struct Screenshot {
    /// Filename only (e.g., "login.png")
    pub name: String,
    /// Raw file contents, sent unmodified with the generation request
    pub bytes: Vec<u8>,
    /// Decoded thumbnail (None when the bytes are not a decodable image)
    pub thumbnail: Option<Handle>,
}

impl Screenshot {
    /// Create a screenshot without a thumbnail
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
            thumbnail: None,
        }
    }

    /// Attach a decoded thumbnail
    pub fn with_thumbnail(mut self, thumbnail: Option<Handle>) -> Self {
        self.thumbnail = thumbnail;
        self
    }
}
