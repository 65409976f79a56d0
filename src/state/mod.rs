/// State management module
///
/// This module handles all workspace state, including:
/// - Shared data structures (data.rs)
/// - The image tray (tray.rs)
/// - The prompt input and template picker (prompt.rs)
/// - The in-flight request tracking (submission.rs)
/// - Title and upload dialogs (dialogs.rs)
/// - Transient notifications (notice.rs)
/// - The store tying them together (workspace.rs)

pub mod data;
pub mod dialogs;
pub mod notice;
pub mod prompt;
pub mod submission;
pub mod tray;
pub mod workspace;

pub use workspace::Workspace;
