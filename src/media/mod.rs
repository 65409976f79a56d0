/// Screenshot loading module
///
/// This module handles:
/// - Reading files chosen in the native picker or dropped on the window
/// - Decoding thumbnails for the tray

pub mod loader;
pub mod thumbnail;
