use std::{thread, time::Duration};

use crossterm::event::{self, Event as CrosstermEvent};
use tokio::sync::mpsc;

use crate::{deezer, error::ExportError, types::ExportJob, types::Track};

/// How long the terminal thread waits for input before emitting a tick.
const TICK_RATE: Duration = Duration::from_millis(120);

/// Representation of all possible events.
#[derive(Debug)]
pub enum Event {
    /// Input from the terminal.
    Terminal(CrosstermEvent),
    /// Emitted when no input arrived within [`TICK_RATE`]; drives the spinner.
    Tick,
    /// Emitted by the background fetch task.
    Fetch(FetchEvent),
}

#[derive(Debug)]
pub enum FetchEvent {
    /// A page was received.
    Progress { fetched: usize, total: Option<u64> },
    /// The fetch is over; carries every track or the reason it stopped.
    Finished(Result<Vec<Track>, ExportError>),
}

/// Single queue the form loop reads from.
///
/// Terminal input and background fetch results both arrive here, so UI state
/// is only ever touched by the task that owns the [`crate::form::app::App`].
#[derive(Debug)]
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new [`EventHandler`] and spawns the terminal input thread.
    pub fn new() -> Self {
        let handler = Self::without_terminal();
        let sender = handler.sender.clone();
        thread::spawn(move || forward_terminal_events(sender));
        handler
    }

    /// Constructs an [`EventHandler`] that only carries fetch events.
    pub fn without_terminal() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Starts fetching the job's playlist on a tokio task.
    ///
    /// Progress and the final result are queued as [`Event::Fetch`]. Must be
    /// called from within a tokio runtime.
    pub fn spawn_fetch(&self, api_url: String, job: &ExportJob) {
        let sender = self.sender.clone();
        let token = job.token.clone();
        let playlist_id = job.playlist_id.clone();

        tokio::spawn(async move {
            let progress = sender.clone();
            let result = deezer::playlist::get_playlist_tracks(
                &api_url,
                &token,
                &playlist_id,
                move |fetched, total| {
                    let _ = progress.send(Event::Fetch(FetchEvent::Progress { fetched, total }));
                },
            )
            .await;

            // The receiver is gone only if the form was closed mid-fetch.
            let _ = sender.send(Event::Fetch(FetchEvent::Finished(result)));
        });
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn forward_terminal_events(sender: mpsc::UnboundedSender<Event>) {
    loop {
        let event = match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(event) => Event::Terminal(event),
                Err(_) => return,
            },
            Ok(false) => Event::Tick,
            Err(_) => return,
        };

        if sender.send(event).is_err() {
            return;
        }
    }
}
