use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::dialogs::{TitleDialog, UploadDialog};
use super::notice::{NoticeBoard, NoticeKind};
use super::prompt::PromptComposer;
use super::submission::{Outcome, Settlement, SubmissionController, Ticket};
use super::tray::ImageTray;
use crate::api::{GenerationRequest, SubmitError};

pub const SUCCESS_NOTICE: &str = "Test case generated successfully!";
pub const FAILURE_NOTICE: &str = "Failed to generate test case.";

/// All state behind the workspace view
///
/// The iced application owns exactly one of these and routes every
/// message into it.
#[derive(Debug)]
pub struct Workspace {
    pub tray: ImageTray,
    pub composer: PromptComposer,
    pub submission: SubmissionController,
    pub title: TitleDialog,
    pub upload: UploadDialog,
    pub notices: NoticeBoard,
    /// Markdown from the last successful generation
    result: String,
}

impl Workspace {
    /// Fresh workspace as it looks on mount, with the title dialog showing
    pub fn new(notice_lifetime: Duration) -> Self {
        Self {
            tray: ImageTray::new(),
            composer: PromptComposer::new(),
            submission: SubmissionController::new(),
            title: TitleDialog::new(),
            upload: UploadDialog::default(),
            notices: NoticeBoard::new(notice_lifetime),
            result: String::new(),
        }
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// Start a submission and package what should be sent
    ///
    /// No validation: an empty prompt and an empty tray are both sent as-is.
    /// Returns None while another submission is outstanding.
    pub fn submit(&mut self) -> Option<(Ticket, GenerationRequest)> {
        let ticket = self.submission.begin()?;
        let request = GenerationRequest::new(self.composer.input(), self.tray.images());
        info!(
            %ticket,
            prompt_chars = request.prompt.len(),
            images = request.images.len(),
            "📤 packaged generation request"
        );
        Some((ticket, request))
    }

    /// Apply the outcome of the request behind `ticket`
    ///
    /// Success replaces the result and clears the prompt. Failure leaves both
    /// untouched. Either way a notice is raised.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, SubmitError>,
        now: Instant,
    ) -> Settlement {
        match outcome {
            Ok(text) => {
                let settlement = self.submission.settle(ticket, Outcome::Succeeded);
                self.result = text;
                self.composer.clear();
                self.notices.push(NoticeKind::Success, SUCCESS_NOTICE, now);
                settlement
            }
            Err(err) => {
                warn!(%ticket, error = %err, "❌ generation failed");
                let settlement = self.submission.settle(ticket, Outcome::Failed);
                self.notices.push(NoticeKind::Error, FAILURE_NOTICE, now);
                settlement
            }
        }
    }

    /// Close the upload dialog and replace the tray with its staged files
    pub fn commit_upload(&mut self) {
        let files = self.upload.confirm();
        info!(count = files.len(), "🖼️ committing upload to tray");
        self.tray.add_images(files);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Screenshot;
    use crate::state::submission::Phase;

    fn workspace() -> Workspace {
        Workspace::new(Duration::from_secs(3))
    }

    fn stage_and_commit(ws: &mut Workspace, names: &[&str]) {
        ws.upload.open();
        let session = ws.upload.start_loading();
        ws.upload.stage(
            session,
            names
                .iter()
                .map(|n| Screenshot::new(*n, n.as_bytes().to_vec()))
                .collect(),
        );
        ws.commit_upload();
    }

    fn tray_names(ws: &Workspace) -> Vec<String> {
        ws.tray.images().iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_title_dialog_shown_on_mount_only_once() {
        let mut ws = workspace();
        assert!(ws.title.is_open());

        ws.title.edit("Shop".to_string());
        ws.title.dismiss();
        let (ticket, _) = ws.submit().unwrap();
        ws.complete(ticket, Ok("done".to_string()), Instant::now());

        assert!(!ws.title.is_open());
        assert_eq!(ws.title.title(), "Shop");
    }

    #[test]
    fn test_empty_submission_allowed() {
        let mut ws = workspace();

        let (_, request) = ws.submit().unwrap();

        assert_eq!(request.prompt, "");
        assert!(request.images.is_empty());
        assert!(ws.submission.is_submitting());
    }

    #[test]
    fn test_success_replaces_result_and_clears_prompt() {
        let mut ws = workspace();
        ws.composer.edit("describe login".to_string());
        let (ticket, request) = ws.submit().unwrap();
        assert_eq!(request.prompt, "describe login");

        let settlement = ws.complete(ticket, Ok("## Steps".to_string()), Instant::now());

        assert_eq!(settlement, Settlement::Current);
        assert_eq!(ws.result(), "## Steps");
        assert_eq!(ws.composer.input(), "");
        assert_eq!(ws.submission.phase(), Phase::Settled(Outcome::Succeeded));
        assert_eq!(ws.notices.notices().len(), 1);
        assert_eq!(ws.notices.notices()[0].kind, NoticeKind::Success);
        assert_eq!(ws.notices.notices()[0].text, SUCCESS_NOTICE);
    }

    #[test]
    fn test_failure_keeps_result_and_prompt() {
        let mut ws = workspace();
        let (first, _) = ws.submit().unwrap();
        ws.complete(first, Ok("old result".to_string()), Instant::now());

        ws.composer.edit("try again".to_string());
        let (second, _) = ws.submit().unwrap();
        ws.complete(second, Err(SubmitError::Status(502)), Instant::now());

        assert_eq!(ws.result(), "old result");
        assert_eq!(ws.composer.input(), "try again");
        assert_eq!(ws.submission.phase(), Phase::Settled(Outcome::Failed));
        let last = ws.notices.notices().last().unwrap();
        assert_eq!(last.kind, NoticeKind::Error);
        assert_eq!(last.text, FAILURE_NOTICE);
    }

    #[test]
    fn test_result_stays_visible_while_submitting() {
        let mut ws = workspace();
        let (first, _) = ws.submit().unwrap();
        ws.complete(first, Ok("previous".to_string()), Instant::now());

        ws.submit().unwrap();

        assert!(ws.submission.is_submitting());
        assert_eq!(ws.result(), "previous");
    }

    #[test]
    fn test_second_submit_refused_while_in_flight() {
        let mut ws = workspace();
        ws.submit().unwrap();

        assert!(ws.submit().is_none());
    }

    #[test]
    fn test_late_response_applied_last_resolved_wins() {
        let mut ws = workspace();
        let (first, _) = ws.submit().unwrap();
        ws.complete(first, Ok("first".to_string()), Instant::now());
        let (second, _) = ws.submit().unwrap();

        let settlement = ws.complete(first, Ok("late".to_string()), Instant::now());

        assert_eq!(settlement, Settlement::Stale);
        assert_eq!(ws.result(), "late");
        assert!(ws.submission.is_submitting());

        ws.complete(second, Ok("second".to_string()), Instant::now());
        assert_eq!(ws.result(), "second");
        assert!(!ws.submission.is_submitting());
    }

    #[test]
    fn test_request_snapshots_tray() {
        let mut ws = workspace();
        stage_and_commit(&mut ws, &["a.png", "b.png"]);
        ws.tray.remove_image(0);

        let (_, request) = ws.submit().unwrap();

        assert_eq!(request.images.len(), 1);
        assert_eq!(request.images[0].file_name, "b.png");
    }

    #[test]
    fn test_upload_replaces_tray_after_removal() {
        let mut ws = workspace();
        stage_and_commit(&mut ws, &["one.png", "two.png", "three.png"]);
        ws.tray.remove_image(1);

        stage_and_commit(&mut ws, &["four.png", "five.png"]);

        assert_eq!(tray_names(&ws), vec!["four.png", "five.png"]);
    }

    #[test]
    fn test_cancelled_upload_read_never_reaches_tray() {
        let mut ws = workspace();
        stage_and_commit(&mut ws, &["kept.png"]);

        ws.upload.open();
        let cancelled = ws.upload.start_loading();
        ws.upload.cancel();
        ws.upload.open();
        ws.upload
            .stage(cancelled, vec![Screenshot::new("stale.png", vec![])]);
        ws.commit_upload();

        assert!(ws.tray.is_empty());
    }

    #[test]
    fn test_confirm_empty_upload_clears_tray() {
        let mut ws = workspace();
        stage_and_commit(&mut ws, &["one.png"]);

        ws.upload.open();
        ws.commit_upload();

        assert!(ws.tray.is_empty());
    }
}
