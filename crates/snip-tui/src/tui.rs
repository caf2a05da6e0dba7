//! Terminal wrapper with async event streaming.
//!
//! This module provides the [`Tui`] struct which wraps a Ratatui terminal
//! drawing on stderr and bridges crossterm events to tokio through a channel.
//! Stdout stays free for whatever the host prints after the picker closes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 Reader task (tokio::spawn)                   │
//! │  ┌──────────────────────┐                                    │
//! │  │ crossterm::event::   │ ─► Event ─► mpsc::Sender           │
//! │  │ EventStream          │                                    │
//! │  └──────────────────────┘                                    │
//! └──────────────────────────────────────────────────────────────┘
//!                                   │
//!                                   ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Tui::next_event ◄── mpsc::Receiver ◄── TerminalPicker       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The picker redraws only when something changed, so there are no tick or
//! render intervals.

use std::io::{self, Stderr};

use crossterm::ExecutableCommand;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, EventStream};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use crate::error::TuiError;
use crate::event::Event;

/// Default channel capacity for events.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Terminal wrapper with async event streaming.
///
/// Manages the terminal state (raw mode, alternate screen, bracketed paste)
/// and provides an async interface for receiving terminal events.
pub struct Tui {
    /// The underlying Ratatui terminal.
    terminal: Terminal<CrosstermBackend<Stderr>>,

    /// Receiver for events from the reader task.
    event_rx: mpsc::Receiver<Event>,

    /// Sender handed to the reader task.
    event_tx: mpsc::Sender<Event>,

    /// Handle to the reader task.
    task: Option<JoinHandle<()>>,

    /// Token for cancelling the reader task.
    cancellation_token: CancellationToken,

    /// Whether raw mode and the alternate screen are active.
    entered: bool,
}

impl Tui {
    /// Creates a new TUI. The terminal is not entered yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> Result<Self, TuiError> {
        let backend = CrosstermBackend::new(io::stderr());
        let terminal = Terminal::new(backend)?;
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        debug!("Created TUI");

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            task: None,
            cancellation_token: CancellationToken::new(),
            entered: false,
        })
    }

    /// Returns `true` while the terminal is in raw mode.
    #[must_use]
    pub const fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enters the terminal (raw mode, alternate screen) and starts reading
    /// events. Does nothing if already entered.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be changed.
    pub fn enter(&mut self) -> Result<(), TuiError> {
        if self.entered {
            return Ok(());
        }
        debug!("Entering terminal");

        enable_raw_mode()?;
        self.entered = true;
        io::stderr().execute(EnterAlternateScreen)?;
        io::stderr().execute(EnableBracketedPaste)?;

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;

        self.start_event_loop();

        debug!("Terminal entered");
        Ok(())
    }

    /// Restores the terminal. Does nothing if not entered.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be restored.
    pub fn exit(&mut self) -> Result<(), TuiError> {
        if !self.entered {
            return Ok(());
        }
        debug!("Exiting terminal");

        self.stop_event_loop();
        self.entered = false;

        self.terminal.show_cursor()?;
        io::stderr().execute(DisableBracketedPaste)?;
        io::stderr().execute(LeaveAlternateScreen)?;
        disable_raw_mode()?;

        debug!("Terminal exited");
        Ok(())
    }

    /// Draws to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw<F>(&mut self, f: F) -> Result<(), TuiError>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Waits for the next terminal event.
    ///
    /// Returns `None` once the event stream has ended. Cancel-safe.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    /// Starts the reader task.
    fn start_event_loop(&mut self) {
        let event_tx = self.event_tx.clone();
        let cancellation_token = self.cancellation_token.clone();

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();

            loop {
                let event = tokio::select! {
                    () = cancellation_token.cancelled() => {
                        debug!("Event loop cancelled");
                        break;
                    }
                    event = reader.next() => event,
                };

                let event = match event {
                    Some(Ok(event)) => Event::from_crossterm(event),
                    Some(Err(e)) => {
                        warn!(error = %e, "Error reading terminal event");
                        None
                    }
                    None => {
                        debug!("Event stream ended");
                        break;
                    }
                };

                if let Some(event) = event {
                    trace!(?event, "Sending event");
                    if event_tx.send(event).await.is_err() {
                        error!("Event channel closed");
                        break;
                    }
                }
            }

            debug!("Event loop ended");
        });

        self.task = Some(task);
    }

    /// Stops the reader task.
    fn stop_event_loop(&mut self) {
        std::mem::take(&mut self.cancellation_token).cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore terminal on drop");
        }
    }
}

impl std::fmt::Debug for Tui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tui")
            .field("entered", &self.entered)
            .field("reading", &self.task.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_new_is_not_entered() {
        // Creating the backend needs no terminal; entering would.
        if let Ok(mut tui) = Tui::new() {
            assert!(!tui.is_entered());
            assert!(tui.exit().is_ok());
        }
    }

    #[test]
    fn test_event_channel_capacity() {
        assert_eq!(EVENT_CHANNEL_CAPACITY, 100);
    }
}
