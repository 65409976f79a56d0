/// Modal dialog state: the onboarding title prompt and the upload staging area

use tracing::debug;

use super::data::Screenshot;

/// Onboarding dialog that names the session
///
/// Starts open and can only ever be dismissed; nothing re-opens it.
#[derive(Debug)]
pub struct TitleDialog {
    open: bool,
    title: String,
}

impl Default for TitleDialog {
    fn default() -> Self {
        Self {
            open: true,
            title: String::new(),
        }
    }
}

impl TitleDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The heading shown above the results (empty means no heading)
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn edit(&mut self, title: String) {
        self.title = title;
    }

    /// Hide the dialog, keeping whatever was typed
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

/// Identifies one opening of the upload dialog
///
/// File reads carry the session they were started in so that a read
/// finishing after the dialog was closed or reopened can be told apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSession(u64);

/// Upload dialog with locally staged files
///
/// Nothing is sent anywhere while files are staged.
#[derive(Debug, Default)]
pub struct UploadDialog {
    open: bool,
    staged: Vec<Screenshot>,
    /// Pending file reads started in the current session
    loading: usize,
    session: UploadSession,
}

impl UploadDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn staged(&self) -> &[Screenshot] {
        &self.staged
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }

    /// Open the dialog with empty staging and a new session
    pub fn open(&mut self) {
        self.open = true;
        self.staged.clear();
        self.loading = 0;
        self.session = UploadSession(self.session.0 + 1);
    }

    /// Record a file read and return the session it belongs to
    pub fn start_loading(&mut self) -> UploadSession {
        self.loading += 1;
        self.session
    }

    /// Add freshly loaded files to the staging area
    ///
    /// Files read in an earlier session, or arriving after the dialog
    /// closed, are dropped.
    pub fn stage(&mut self, session: UploadSession, files: Vec<Screenshot>) {
        if !self.open || session != self.session {
            debug!(count = files.len(), "dropping files from a closed upload session");
            return;
        }

        self.loading = self.loading.saturating_sub(1);
        self.staged.extend(files);
    }

    /// Close the dialog and hand over the complete staged selection
    pub fn confirm(&mut self) -> Vec<Screenshot> {
        self.open = false;
        self.loading = 0;
        std::mem::take(&mut self.staged)
    }

    /// Close the dialog and discard the staged selection
    pub fn cancel(&mut self) {
        self.open = false;
        self.loading = 0;
        self.staged.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_dialog_starts_open_and_stays_dismissed() {
        let mut dialog = TitleDialog::new();
        assert!(dialog.is_open());
        assert_eq!(dialog.title(), "");

        dialog.edit("Checkout flow".to_string());
        dialog.dismiss();

        assert!(!dialog.is_open());
        assert_eq!(dialog.title(), "Checkout flow");
    }

    #[test]
    fn test_upload_confirm_returns_staged_in_order() {
        let mut dialog = UploadDialog::default();
        dialog.open();
        let first = dialog.start_loading();
        let second = dialog.start_loading();
        assert!(dialog.is_loading());
        dialog.stage(first, vec![Screenshot::new("a.png", vec![1])]);
        dialog.stage(second, vec![Screenshot::new("b.png", vec![2])]);
        assert!(!dialog.is_loading());

        let files = dialog.confirm();

        assert!(!dialog.is_open());
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
        assert!(dialog.staged().is_empty());
    }

    #[test]
    fn test_upload_cancel_discards_and_late_files_ignored() {
        let mut dialog = UploadDialog::default();
        dialog.open();
        let session = dialog.start_loading();
        dialog.cancel();

        dialog.stage(session, vec![Screenshot::new("late.png", vec![])]);

        assert!(dialog.staged().is_empty());
        assert!(!dialog.is_loading());
    }

    #[test]
    fn test_reopen_starts_with_empty_staging() {
        let mut dialog = UploadDialog::default();
        dialog.open();
        let session = dialog.start_loading();
        dialog.stage(session, vec![Screenshot::new("a.png", vec![])]);
        dialog.cancel();

        dialog.open();

        assert!(dialog.staged().is_empty());
    }

    #[test]
    fn test_read_from_cancelled_session_not_staged_after_reopen() {
        let mut dialog = UploadDialog::default();
        dialog.open();
        let cancelled = dialog.start_loading();
        dialog.cancel();

        dialog.open();
        let current = dialog.start_loading();
        dialog.stage(cancelled, vec![Screenshot::new("from_cancelled.png", vec![])]);

        assert!(dialog.staged().is_empty());
        assert!(dialog.is_loading());

        dialog.stage(current, vec![Screenshot::new("fresh.png", vec![])]);
        let names: Vec<_> = dialog.confirm().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["fresh.png"]);
    }
}
