/// Screenshot file loading
///
/// Files are only read into memory here. Nothing is uploaded until the
/// user submits the whole form.

use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

use super::thumbnail::generate_thumbnail;
use crate::state::data::Screenshot;

/// Extensions offered by the picker's default filter
pub const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

/// Show the native multi-file picker and load everything chosen
/// Only the image filter is offered; rfd maps a `*` extension to `*.*`,
/// which would hide extension-less files anyway. Those can still be dropped.
/// Returns an empty list if the user cancels
pub async fn pick_screenshots() -> Vec<Screenshot> {
    let Some(handles) = AsyncFileDialog::new()
        .set_title("Select Screenshots")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_files()
        .await
    else {
        debug!("file picker cancelled");
        return Vec::new();
    };

    let mut files = Vec::with_capacity(handles.len());
    for handle in handles {
        let bytes = handle.read().await;
        files.push((handle.file_name(), bytes));
    }

    prepare(files).await
}

/// Load files dropped onto the window
/// Unreadable paths are logged and skipped
pub async fn load_paths(paths: Vec<PathBuf>) -> Vec<Screenshot> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match tokio::fs::read(&path).await {
            Ok(bytes) => files.push((display_name(&path), bytes)),
            Err(e) => warn!(path = %path.display(), error = %e, "⚠️ skipping unreadable file"),
        }
    }

    prepare(files).await
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

/// Decode thumbnails off the UI thread
async fn prepare(files: Vec<(String, Vec<u8>)>) -> Vec<Screenshot> {
    // Spawn blocking because image decoding is CPU-intensive
    tokio::task::spawn_blocking(move || {
        files
            .into_iter()
            .map(|(name, bytes)| {
                let thumbnail = generate_thumbnail(&bytes);
                if thumbnail.is_none() {
                    debug!(%name, "no thumbnail, showing placeholder");
                }
                Screenshot::new(name, bytes).with_thumbnail(thumbnail)
            })
            .collect()
    })
    .await
    .unwrap_or_else(|e| {
        error!(error = %e, "thumbnail task failed");
        Vec::new()
    })
}
