use iced::widget::{column, container, markdown, row, scrollable, stack, text};
use iced::{event, font, time, window};
use iced::{Alignment, Color, Element, Event, Font, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

mod api;
mod config;
mod logging;
mod media;
mod state;
mod ui;

use api::{GenerationClient, SubmitError};
use config::{AppConfig, ConfigError};
use state::data::Screenshot;
use state::dialogs::UploadSession;
use state::submission::Ticket;
use state::Workspace;

/// Errors that stop the application before or while the window runs
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("UI runtime failed: {0}")]
    Ui(#[from] iced::Error),
}

/// Main application state
struct TestgenStudio {
    /// Everything the workspace view shows
    workspace: Workspace,
    /// Client for the generation endpoint
    client: GenerationClient,
    /// Parsed markdown of the current result, refreshed when the result changes
    rendered: Vec<markdown::Item>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Onboarding title field edited
    TitleChanged(String),
    /// Onboarding dialog confirmed or dismissed
    TitleConfirmed,
    /// "AI Prompts" pressed
    OpenTemplates,
    CloseTemplates,
    /// A canned prompt was picked
    TemplateChosen(&'static str),
    PromptChanged(String),
    /// "+" pressed next to the prompt
    OpenUpload,
    /// "Browse..." pressed in the upload dialog
    BrowseFiles,
    /// A file was dropped on the window
    FileDropped(PathBuf),
    /// Background file read finished for the given dialog session
    FilesLoaded(UploadSession, Vec<Screenshot>),
    ConfirmUpload,
    CancelUpload,
    /// Remove control on the thumbnail at this position
    RemoveImage(usize),
    Submit,
    /// Generation request finished
    Generated(Ticket, Result<String, SubmitError>),
    /// Link clicked inside the rendered result
    LinkClicked(markdown::Url),
    /// Periodic tick used to expire notices
    Tick(Instant),
}

impl TestgenStudio {
    /// Create a new instance of the application
    fn new(client: GenerationClient, notice_lifetime: Duration) -> (Self, Task<Message>) {
        // Title dialog is open from the very first frame
        let workspace = Workspace::new(notice_lifetime);

        (
            TestgenStudio {
                workspace,
                client,
                rendered: Vec::new(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match self.workspace.title.title() {
            "" => "Testgen Studio".to_string(),
            title => format!("{} - Testgen Studio", title),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleChanged(title) => {
                self.workspace.title.edit(title);
                Task::none()
            }
            Message::TitleConfirmed => {
                self.workspace.title.dismiss();
                Task::none()
            }
            Message::OpenTemplates => {
                self.workspace.composer.open_picker();
                Task::none()
            }
            Message::CloseTemplates => {
                self.workspace.composer.close_picker();
                Task::none()
            }
            Message::TemplateChosen(template) => {
                self.workspace.composer.insert_prompt(template);
                Task::none()
            }
            Message::PromptChanged(text) => {
                self.workspace.composer.edit(text);
                Task::none()
            }
            Message::OpenUpload => {
                self.workspace.upload.open();
                Task::none()
            }
            Message::BrowseFiles => {
                let session = self.workspace.upload.start_loading();
                Task::perform(media::loader::pick_screenshots(), move |files| {
                    Message::FilesLoaded(session, files)
                })
            }
            Message::FileDropped(path) => {
                if !self.workspace.upload.is_open() {
                    debug!(path = %path.display(), "ignoring drop outside the upload dialog");
                    return Task::none();
                }

                let session = self.workspace.upload.start_loading();
                Task::perform(media::loader::load_paths(vec![path]), move |files| {
                    Message::FilesLoaded(session, files)
                })
            }
            Message::FilesLoaded(session, files) => {
                info!(count = files.len(), "📸 files loaded");
                self.workspace.upload.stage(session, files);
                Task::none()
            }
            Message::ConfirmUpload => {
                self.workspace.commit_upload();
                Task::none()
            }
            Message::CancelUpload => {
                self.workspace.upload.cancel();
                Task::none()
            }
            Message::RemoveImage(index) => {
                self.workspace.tray.remove_image(index);
                Task::none()
            }
            Message::Submit => {
                let Some((ticket, request)) = self.workspace.submit() else {
                    return Task::none();
                };

                let client = self.client.clone();
                Task::perform(
                    async move { client.generate(request).await },
                    move |result| Message::Generated(ticket, result),
                )
            }
            Message::Generated(ticket, result) => {
                let succeeded = result.is_ok();
                self.workspace.complete(ticket, result, Instant::now());
                if succeeded {
                    self.rendered = markdown::parse(self.workspace.result()).collect();
                }
                Task::none()
            }
            Message::LinkClicked(url) => {
                info!(%url, "link clicked in result");
                Task::none()
            }
            Message::Tick(now) => {
                self.workspace.notices.prune(now);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let workspace = &self.workspace;

        let heading = (!workspace.title.title().is_empty()).then(|| {
            text(workspace.title.title())
                .size(72)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(Color::from_rgb8(0x61, 0x47, 0xFF))
        });

        let mut body = column![].spacing(20).width(Length::Fixed(ui::CONTENT_WIDTH));
        if workspace.submission.is_submitting() {
            body = body.push(ui::result::skeleton());
        }
        if !workspace.result().is_empty() {
            body = body.push(ui::result::rendered(&self.rendered, &self.theme()));
        }

        let main = column![]
            .push_maybe(heading)
            .push(scrollable(body).height(Length::Fill))
            .push(ui::composer::composer_row(workspace))
            .spacing(20)
            .padding(24)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        let mut screen: Element<'_, Message> = row![main, ui::tray::side_panel(workspace)].into();

        if workspace.upload.is_open() {
            screen = ui::modal(screen, ui::dialogs::upload_dialog(workspace), Message::CancelUpload);
        }
        if workspace.composer.is_picker_open() {
            screen = ui::modal(screen, ui::composer::template_picker(workspace), Message::CloseTemplates);
        }
        if workspace.title.is_open() {
            screen = ui::modal(screen, ui::dialogs::title_dialog(workspace), Message::TitleConfirmed);
        }

        if workspace.notices.is_empty() {
            return screen;
        }

        container(stack![screen, ui::notices::notice_stack(workspace.notices.notices())])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let drops = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        });

        if self.workspace.notices.is_empty() {
            drops
        } else {
            Subscription::batch([drops, time::every(Duration::from_millis(250)).map(Message::Tick)])
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    logging::init(&config.log_filter);

    match &config.source {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("no config file found, using defaults"),
    }

    let client = GenerationClient::new(&config)?;
    info!(endpoint = %client.endpoint(), "🎨 Testgen Studio starting");

    let notice_lifetime = Duration::from_secs(config.notice_seconds);

    iced::application(TestgenStudio::title, TestgenStudio::update, TestgenStudio::view)
        .subscription(TestgenStudio::subscription)
        .theme(TestgenStudio::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || TestgenStudio::new(client, notice_lifetime))?;

    Ok(())
}
