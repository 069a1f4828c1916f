use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;

mod config;
mod error;
mod state;
mod ui;

use config::AppConfig;
use error::ArchiveError;
use state::archiver::{Archiver, Pane};
use state::browser::DirectoryBrowser;
use state::tracker::{ArchiveStore, ArchiveTracker, MemoryTracker};
use ui::Click;

/// Main application state
struct FileArchiver {
    /// Browsers, candidate list and archive tracker
    archiver: Archiver,
    /// Ask before closing the window
    confirm_exit: bool,
    /// Status message to display to the user
    status: String,
    /// Last entry press, used to detect double-clicks
    last_click: Option<Click>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Up" button of a pane
    Ascend(Pane),
    /// User pressed an entry in a pane; twice in a row opens it
    EntryPressed(Pane, String),
    /// User clicked the "Check Files" button
    CheckFiles,
    /// User clicked the "Copy Files" button
    CopyFiles,
    /// The window manager asked to close the window
    CloseRequested(window::Id),
}

impl FileArchiver {
    fn new(archiver: Archiver, config: &AppConfig) -> Self {
        let status = format!(
            "Ready. Last archive: {}.",
            ui::format_archive_time(archiver.last_archive_time())
        );

        FileArchiver {
            archiver,
            confirm_exit: config.confirm_exit,
            status,
            last_click: None,
        }
    }

    /// Report a failed action to the user
    fn warn(&mut self, error: ArchiveError) {
        log::warn!("⚠️  {}", error);
        self.status = error.to_string();
        ui::dialog::warning(&error);
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Ascend(pane) => {
                self.last_click = None;
                if let Err(e) = self.archiver.ascend(pane) {
                    self.warn(e);
                }
            }
            Message::EntryPressed(pane, name) => {
                let click = Click::new(pane, name);
                let is_double = self
                    .last_click
                    .as_ref()
                    .is_some_and(|previous| previous.is_double(&click));

                if !is_double {
                    self.last_click = Some(click);
                    return Task::none();
                }

                self.last_click = None;
                if let Err(e) = self.archiver.descend(pane, &click.name) {
                    self.warn(e);
                }
            }
            Message::CheckFiles => {
                let found = self.archiver.check_files().map(|list| list.len());
                match found {
                    Ok(0) => self.status = "No text files were modified since the last archive.".to_string(),
                    Ok(count) => self.status = format!("{} file(s) ready to copy.", count),
                    Err(e) => self.warn(e),
                }
            }
            Message::CopyFiles => match self.archiver.copy_files() {
                Ok(report) => {
                    self.status = format!(
                        "Copied {} file(s) to {}.",
                        report.copied,
                        report.destination.display()
                    );
                    ui::dialog::info(
                        "File Transfer",
                        &format!("Files successfully copied to: \n {}", report.destination.display()),
                    );
                }
                Err(e) => self.warn(e),
            },
            Message::CloseRequested(id) => {
                if !self.confirm_exit || ui::dialog::confirm("Exit Program", "Okay to exit program?") {
                    log::info!("👋 Closing");
                    return window::close(id);
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let selected = |pane: Pane| {
            self.last_click
                .as_ref()
                .filter(|click| click.pane == pane)
                .map(|click| click.name.as_str())
        };

        let panes = row![
            ui::pane::view(Pane::Source, self.archiver.browser(Pane::Source), selected(Pane::Source)),
            ui::pane::view(
                Pane::Destination,
                self.archiver.browser(Pane::Destination),
                selected(Pane::Destination)
            ),
        ]
        .spacing(20);

        let candidates = Column::with_children(
            self.archiver
                .candidates()
                .iter()
                .map(|name| text(name.to_string()).size(13).into()),
        )
        .spacing(2);

        let transfer = column![
            row![
                button("Check Files").on_press(Message::CheckFiles).padding(8),
                button("Copy Files").on_press(Message::CopyFiles).padding(8),
            ]
            .spacing(10),
            text("The following text files have been modified since the last archive action:").size(14),
            container(scrollable(candidates).height(Length::Fixed(110.0)))
                .padding(4)
                .width(Length::Fill)
                .style(container::bordered_box),
        ]
        .spacing(8)
        .width(Length::FillPortion(1));

        let last_archived = container(
            column![
                text("Files last archived:").size(14),
                text(ui::format_archive_time(self.archiver.last_archive_time())).size(13),
            ]
            .spacing(10)
            .align_x(Alignment::Center),
        )
        .padding(20)
        .style(container::bordered_box)
        .center_x(Length::FillPortion(1));

        let content = column![
            text("Instructions:").size(14),
            text(ui::INSTRUCTIONS).size(13),
            panes,
            row![transfer, last_archived].spacing(20).align_y(Alignment::Center),
            text(&self.status).size(12),
        ]
        .spacing(10)
        .padding(15);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Intercept window close requests for the exit confirmation
    fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::CloseRequested)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Browser on the configured folder, or the working directory
fn open_browser(configured: Option<&PathBuf>) -> Result<DirectoryBrowser, ArchiveError> {
    if let Some(path) = configured {
        match DirectoryBrowser::new(path.clone()) {
            Ok(browser) => return Ok(browser),
            Err(e) => log::warn!("⚠️  Ignoring start folder: {}", e),
        }
    }
    DirectoryBrowser::from_current_dir()
}

/// Open the archive database, or keep the archive time in memory for this session
fn open_tracker(config: &AppConfig) -> Box<dyn ArchiveTracker> {
    match ArchiveStore::open(&config.database_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::error!("❌ {} - archive time will not be saved", e);
            Box::new(MemoryTracker::new())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let archiver = Archiver::new(
        open_tracker(&config),
        open_browser(config.source_dir.as_ref())?,
        open_browser(config.destination_dir.as_ref())?,
    )?;
    log::info!("🗂️  File archiver initialized: {:?}", archiver);

    let settings = window::Settings {
        size: Size::new(775.0, 600.0),
        resizable: false,
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application("File Transfer Utility", FileArchiver::update, FileArchiver::view)
        .theme(FileArchiver::theme)
        .subscription(FileArchiver::subscription)
        .window(settings)
        .centered()
        .run_with(move || (FileArchiver::new(archiver, &config), Task::none()))?;

    Ok(())
}
