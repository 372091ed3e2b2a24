use iced::widget::{container, scrollable};
use iced::{event, keyboard, window, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod error;
mod ingest;
mod state;
mod ui;

use config::Settings;
use ingest::IngestBatch;
use state::{PhotoId, Session, ViewState};

/// Main application state
struct ReliableNarrator {
    /// Photos, viewer cursor and current screen
    session: Session,
    /// Settings loaded at startup
    settings: Settings,
    /// Files are being dragged over the window
    drag_active: bool,
    /// Status message to display to the user
    status: String,
    /// Paths waiting for the next load (a multi-file drop, or input that
    /// arrived while another load was running)
    pending: Vec<PathBuf>,
    /// A `FlushDrop` is already on its way
    flush_scheduled: bool,
    /// A load is running; batches are merged one at a time, in arrival order
    loading: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the drop zone or "+ Add more photos"
    BrowsePhotos,
    /// Background ingestion finished
    PhotosLoaded(Result<IngestBatch, String>),
    /// Files are hovering over the window
    FilesHovered,
    /// Hovering files left the window without a drop
    FilesHoveredLeft,
    /// A file or folder was dropped on the window (one event per file)
    FileDropped(PathBuf),
    /// Every `FileDropped` of the current drop has been received
    FlushDrop,
    /// "Let's begin"
    BeginWalkthrough,
    /// Thumbnail clicked in the review grid
    OpenPhoto(usize),
    /// Thumbnail clicked in the viewer strip
    Navigate(usize),
    Previous,
    Next,
    RemovePhoto(PhotoId),
    /// Delete key in the viewer
    RemoveCurrent,
    BackToReview,
    /// Drop everything and return to the upload screen
    StartOver,
}

impl ReliableNarrator {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        log::info!("🖋️  Reliable Narrator started");

        (
            ReliableNarrator {
                session: Session::new(),
                settings,
                drag_active: false,
                status: String::new(),
                pending: Vec::new(),
                flush_scheduled: false,
                loading: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowsePhotos => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Choose your week's photos")
                    .add_filter("Images", &ingest::IMAGE_EXTENSIONS)
                    .pick_files();

                match picked {
                    Some(paths) if !paths.is_empty() => {
                        self.pending.extend(paths);
                        self.load_pending()
                    }
                    _ => Task::none(),
                }
            }
            Message::FileDropped(path) => {
                self.drag_active = false;
                self.pending.push(path);

                // The rest of this drop is already queued behind this message
                if self.flush_scheduled {
                    return Task::none();
                }
                self.flush_scheduled = true;
                Task::done(Message::FlushDrop)
            }
            Message::FlushDrop => {
                self.flush_scheduled = false;
                self.load_pending()
            }
            Message::FilesHovered => {
                self.drag_active = true;
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.drag_active = false;
                Task::none()
            }
            Message::PhotosLoaded(Ok(batch)) => {
                self.loading = false;
                let skipped = batch.skipped;
                let added = self.session.ingest(batch.records);
                self.status = ingest_status(added, skipped);

                self.load_pending()
            }
            Message::PhotosLoaded(Err(e)) => {
                self.loading = false;
                log::error!("❌ Loading photos failed: {}", e);
                self.status = "Could not load those photos.".to_string();

                self.load_pending()
            }
            Message::BeginWalkthrough => {
                self.session.enter_viewer();
                Task::none()
            }
            Message::OpenPhoto(index) => {
                self.session.open_photo(index);
                Task::none()
            }
            Message::Navigate(index) => {
                self.session.navigate(index);
                Task::none()
            }
            Message::Previous => {
                self.session.previous();
                Task::none()
            }
            Message::Next => {
                self.session.next();
                Task::none()
            }
            Message::RemovePhoto(id) => {
                self.session.remove(&id);
                self.clear_status_if_empty();
                Task::none()
            }
            Message::RemoveCurrent => {
                if self.session.view() == ViewState::Viewer {
                    self.session.remove_current();
                    self.clear_status_if_empty();
                }
                Task::none()
            }
            Message::BackToReview => {
                self.session.back_to_review();
                Task::none()
            }
            Message::StartOver => {
                self.session.clear();
                self.status.clear();
                Task::none()
            }
        }
    }

    /// Start a background ingestion of everything pending.
    ///
    /// Does nothing while another load is running; its completion picks the
    /// pending paths up, so batches merge in the order they arrived.
    fn load_pending(&mut self) -> Task<Message> {
        if self.loading || self.pending.is_empty() {
            return Task::none();
        }

        let paths = std::mem::take(&mut self.pending);
        self.loading = true;
        self.status = format!("Loading {}...", ui::counted(paths.len(), "item"));

        Task::perform(
            ingest::load_photos(paths, self.settings.clone()),
            |result| Message::PhotosLoaded(result.map_err(|e| e.to_string())),
        )
    }

    /// An emptied session shows a fresh upload screen
    fn clear_status_if_empty(&mut self) {
        if self.session.view() == ViewState::Upload {
            self.status.clear();
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let screen = match self.session.view() {
            ViewState::Upload => ui::upload::view(self.drag_active, &self.status),
            ViewState::Review => ui::review::view(&self.session, &self.status),
            ViewState::Viewer => ui::viewer::view(&self.session),
        };

        let content = container(screen).max_width(480.0).padding([0, 20]);

        container(scrollable(
            container(content).width(Length::Fill).center_x(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(ui::theme::BG.into()),
            ..container::Style::default()
        })
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(event_message)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme::theme()
    }
}

/// "Added 2 photos, skipped 1 other file."
fn ingest_status(added: usize, skipped: usize) -> String {
    match (added, skipped) {
        (0, 0) => String::new(),
        (0, _) => format!("No photos found in {}.", ui::counted(skipped, "file")),
        (_, 0) => format!("Added {}.", ui::counted(added, "photo")),
        _ => format!(
            "Added {}, skipped {} other {}.",
            ui::counted(added, "photo"),
            skipped,
            if skipped == 1 { "file" } else { "files" }
        ),
    }
}

/// Translate window and keyboard events into messages
fn event_message(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            match key.as_ref() {
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Previous),
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::BackToReview),
                keyboard::Key::Named(keyboard::key::Named::Delete) => Some(Message::RemoveCurrent),
                _ => None,
            }
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load_or_default();
    let window_size = (settings.window_width, settings.window_height);

    iced::application(ui::TITLE, ReliableNarrator::update, ReliableNarrator::view)
        .subscription(ReliableNarrator::subscription)
        .theme(ReliableNarrator::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || ReliableNarrator::new(settings))
}
