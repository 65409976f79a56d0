use tracing::{debug, warn};

use super::data::Screenshot;

/// The Image Tray holds the screenshots that go out with the next submission.
///
/// Entries are addressed by position only. Replacing or removing an entry
/// drops its thumbnail handle along with it.
#[derive(Debug, Default)]
pub struct ImageTray {
    images: Vec<Screenshot>,
}

impl ImageTray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a new selection
    pub fn add_images(&mut self, images: Vec<Screenshot>) {
        debug!(
            previous = self.images.len(),
            incoming = images.len(),
            "replacing tray contents"
        );
        self.images = images;
    }

    /// Remove exactly the image at `index`
    ///
    /// Returns the removed image, or None if the index is out of range.
    pub fn remove_image(&mut self, index: usize) -> Option<Screenshot> {
        if index >= self.images.len() {
            warn!(index, len = self.images.len(), "ignoring out-of-range tray removal");
            return None;
        }

        let removed = self.images.remove(index);
        if self.is_empty() {
            debug!("tray is now empty");
        }
        debug!(index, name = %removed.name, "removed image from tray");
        Some(removed)
    }

    pub fn images(&self) -> &[Screenshot] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
