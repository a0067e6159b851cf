use std::{io::Stdout, path::PathBuf};

use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    Res,
    error::ExportError,
    form::{
        event::{Event, EventHandler, FetchEvent},
        input,
        picker::FilePicker,
        ui,
    },
    sheet, table,
    types::{ExportJob, Track},
    utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Token,
    PlaylistId,
    Output,
    Browse,
    Export,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Token => Focus::PlaylistId,
            Focus::PlaylistId => Focus::Output,
            Focus::Output => Focus::Browse,
            Focus::Browse => Focus::Export,
            Focus::Export => Focus::Token,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Token => Focus::Export,
            Focus::PlaylistId => Focus::Token,
            Focus::Output => Focus::PlaylistId,
            Focus::Browse => Focus::Output,
            Focus::Export => Focus::Browse,
        }
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Token | Focus::PlaylistId | Focus::Output)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub token: String,
    pub playlist_id: String,
    pub output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// Modal message shown over the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Values the form starts with.
#[derive(Debug, Clone)]
pub struct FormSettings {
    pub api_url: String,
    pub token: Option<String>,
    pub default_dir: PathBuf,
}

pub struct App {
    pub phase: Phase,
    pub fields: FormFields,
    pub focus: Focus,
    pub dialog: Option<Dialog>,
    pub picker: Option<FilePicker>,
    pub status_message: String,
    pub fetched: usize,
    pub total: Option<u64>,
    pub spinner_frame: usize,
    pub running: bool,

    api_url: String,
    default_dir: PathBuf,
    /// Job being fetched; its output path is used once tracks arrive.
    job: Option<ExportJob>,
    events: EventHandler,
}

impl App {
    pub fn new(settings: FormSettings, events: EventHandler) -> Self {
        Self {
            phase: Phase::Idle,
            fields: FormFields {
                token: settings.token.unwrap_or_default(),
                ..FormFields::default()
            },
            focus: Focus::Token,
            dialog: None,
            picker: None,
            status_message: "Ready".to_string(),
            fetched: 0,
            total: None,
            spinner_frame: 0,
            running: true,
            api_url: settings.api_url,
            default_dir: settings.default_dir,
            job: None,
            events,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Res<()> {
        while self.running {
            terminal.draw(|frame| ui::render(frame, self))?;

            match self.events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        Ok(())
    }

    /// Waits for the next queued event and handles it.
    ///
    /// Returns `false` once the queue is closed.
    pub async fn step(&mut self) -> bool {
        match self.events.next().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Terminal(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                input::handle_key_event(self, key)
            }
            Event::Terminal(CrosstermEvent::Paste(text)) => input::handle_paste(self, &text),
            Event::Terminal(_) => {}
            Event::Tick => {
                if self.phase == Phase::Fetching {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
            Event::Fetch(fetch_event) => self.handle_fetch_event(fetch_event),
        }
    }

    pub fn export_enabled(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Validates the fields and starts the background fetch.
    ///
    /// Does nothing while a fetch is running. Empty fields open an error dialog
    /// without touching the network.
    pub fn submit(&mut self) {
        if !self.export_enabled() {
            return;
        }

        let Some(job) = utils::build_job(
            &self.fields.token,
            &self.fields.playlist_id,
            &self.fields.output,
        ) else {
            self.dialog = Some(Dialog::error(ExportError::MissingFields.to_string()));
            return;
        };

        self.phase = Phase::Fetching;
        self.fetched = 0;
        self.total = None;
        self.status_message = format!("Fetching playlist {}...", job.playlist_id);

        self.events.spawn_fetch(self.api_url.clone(), &job);
        self.job = Some(job);
    }

    /// Opens the save-as picker next to the current output path.
    pub fn browse(&mut self) {
        let picker = FilePicker::open(
            &self.fields.output,
            &self.fields.playlist_id,
            &self.default_dir,
        );
        if let Some(e) = &picker.error {
            self.status_message = e.clone();
        }
        self.picker = Some(picker);
    }

    /// Writes the picked path into the output field and closes the picker.
    pub fn choose_output(&mut self, path: PathBuf) {
        self.picker = None;
        self.fields.output = path.display().to_string();
        self.status_message = format!("Output set to {}", self.fields.output);
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    pub fn handle_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Progress { fetched, total } => {
                self.fetched = fetched;
                self.total = total;
                self.status_message = match total {
                    Some(total) => format!("Fetched {}/{} tracks...", fetched, total),
                    None => format!("Fetched {} tracks...", fetched),
                };
            }
            FetchEvent::Finished(result) => {
                self.phase = Phase::Idle;
                let job = self.job.take();

                match (result, job) {
                    (Ok(tracks), Some(job)) => self.save(&tracks, job.output),
                    (Ok(_), None) => {}
                    (Err(e), _) => {
                        self.status_message = "Export failed".to_string();
                        self.dialog = Some(Dialog::error(e.to_string()));
                    }
                }
            }
        }
    }

    fn save(&mut self, tracks: &[Track], output: PathBuf) {
        let rows = table::build_rows(tracks);

        match sheet::write_workbook(&rows, &output) {
            Ok(_) => {
                self.status_message = format!("Exported {} tracks", rows.len());
                self.dialog = Some(Dialog::info(format!(
                    "Playlist data saved to {} with formatting",
                    output.display()
                )));
            }
            Err(e) => {
                self.status_message = "Export failed".to_string();
                self.dialog = Some(Dialog::error(e.to_string()));
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
