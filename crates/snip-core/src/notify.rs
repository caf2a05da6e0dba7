//! User-visible notifications.
//!
//! Every error, warning, or informational message produced by a session goes
//! through a [`Notifier`]. Hosts decide how to show them; [`NotificationLog`]
//! queues them so they can be shown once the list widget is gone.

use std::sync::Arc;

use parking_lot::Mutex;

/// Severity of a user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something went partially wrong; the workflow continues.
    Warning,
    /// The workflow could not do what was asked.
    Error,
}

impl Severity {
    /// Returns a short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// How serious the message is.
    pub severity: Severity,
    /// The message text.
    pub message: String,
}

/// The notification collaborator.
pub trait Notifier {
    /// Shows a message with the given severity.
    fn notify(&self, severity: Severity, message: &str);

    /// Shows an error message.
    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    /// Shows a warning message.
    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    /// Shows an informational message.
    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message);
    }
}

/// A cloneable, shared queue of notifications.
///
/// Each message is also emitted through `tracing` as it arrives.
///
/// # Examples
///
/// ```
/// use snip_core::{NotificationLog, Notifier, Severity};
///
/// let log = NotificationLog::new();
/// log.warning("Some snippet folders are not accessible: /missing");
/// assert_eq!(log.count(Severity::Warning), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every queued notification, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    /// Removes and returns every queued notification.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Counts queued notifications of one severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::error!(text = message, "User notification"),
            Severity::Warning => tracing::warn!(text = message, "User notification"),
            Severity::Info => tracing::info!(text = message, "User notification"),
        }
        self.entries.lock().push(Notification {
            severity,
            message: message.to_owned(),
        });
    }
}
