//! Debounced preview loading.
//!
//! [`PreviewService`] turns highlight changes into at most one preview load
//! per debounce window. Every highlight change cancels the pending timer and
//! bumps a generation counter; a load carries the generation it was started
//! under, and [`PreviewService::is_current`] rejects anything older. A late
//! load therefore never reaches the display even if its cancellation lost the
//! race.
//!
//! Timers come from a [`Scheduler`], so tests can drive them by hand.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use snip_catalog::FileSystem;
use snip_core::{PreviewConfig, PreviewLimits, render_preview};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// A cancellable timer capability.
pub trait Scheduler {
    /// Identifies a scheduled task.
    type Handle;

    /// Runs `task` after `delay`, unless cancelled first.
    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: Future<Output = ()> + Send + 'static;

    /// Cancels a scheduled task. Cancelling a finished task does nothing.
    fn cancel(&self, handle: Self::Handle);
}

/// A [`Scheduler`] backed by `tokio::spawn` and `tokio::time::sleep`.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    type Handle = CancellationToken;

    fn schedule<F>(&self, delay: Duration, task: F) -> CancellationToken
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                () = cancelled.cancelled() => {
                    tracing::trace!("Scheduled task cancelled");
                }
                () = async {
                    tokio::time::sleep(delay).await;
                    task.await;
                } => {}
            }
        });

        token
    }

    fn cancel(&self, handle: CancellationToken) {
        handle.cancel();
    }
}

/// A finished preview load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLoaded {
    /// Generation the load was started under.
    pub ticket: u64,
    /// The file that was read.
    pub path: Utf8PathBuf,
    /// The truncated preview text.
    pub preview: String,
}

/// Loads previews for the highlighted record.
pub struct PreviewService<F, S: Scheduler> {
    fs: Arc<F>,
    scheduler: S,
    delay: Duration,
    limits: PreviewLimits,
    pending: Option<S::Handle>,
    generation: u64,
    loaded_tx: mpsc::UnboundedSender<PreviewLoaded>,
}

impl<F, S> PreviewService<F, S>
where
    F: FileSystem + 'static,
    S: Scheduler,
{
    /// Creates the service and the channel its loads are delivered on.
    #[must_use]
    pub fn new(
        fs: Arc<F>,
        scheduler: S,
        config: &PreviewConfig,
    ) -> (Self, mpsc::UnboundedReceiver<PreviewLoaded>) {
        let (loaded_tx, loaded_rx) = mpsc::unbounded_channel();
        let service = Self {
            fs,
            scheduler,
            delay: config.debounce(),
            limits: config.limits(),
            pending: None,
            generation: 0,
            loaded_tx,
        };
        (service, loaded_rx)
    }

    /// Current generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles a highlight change.
    ///
    /// Cancels any pending load, then schedules a load of `path` after the
    /// debounce delay. `None` (a marker or an empty list) only cancels.
    pub fn on_highlight(&mut self, path: Option<&Utf8Path>) {
        self.cancel();

        let Some(path) = path else {
            return;
        };

        let ticket = self.generation;
        let fs = Arc::clone(&self.fs);
        let loaded_tx = self.loaded_tx.clone();
        let limits = self.limits;
        let path = path.to_owned();

        let handle = self.scheduler.schedule(self.delay, async move {
            let bytes = match fs.read_file(&path).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::debug!(path = %path, error = %err, "Preview load failed");
                    return;
                }
            };
            let preview = render_preview(&String::from_utf8_lossy(&bytes), limits);
            if loaded_tx
                .send(PreviewLoaded {
                    ticket,
                    path,
                    preview,
                })
                .is_err()
            {
                tracing::trace!("Preview receiver gone");
            }
        });
        self.pending = Some(handle);
    }

    /// Returns `true` if `loaded` belongs to the latest highlight.
    #[must_use]
    pub const fn is_current(&self, loaded: &PreviewLoaded) -> bool {
        loaded.ticket == self.generation
    }

    /// Cancels the pending load and invalidates any in-flight one.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.generation += 1;
    }
}

impl<F, S: Scheduler> std::fmt::Debug for PreviewService<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewService")
            .field("delay", &self.delay)
            .field("limits", &self.limits)
            .field("pending", &self.pending.is_some())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::pin::Pin;

    use parking_lot::Mutex;

    use super::*;

    type Task = Pin<Box<dyn Future<Output = ()> + Send>>;

    #[derive(Default)]
    struct Slot {
        task: Option<Task>,
        cancelled: bool,
    }

    /// A scheduler whose tasks only run when the test says so.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        slots: Arc<Mutex<Vec<Slot>>>,
    }

    impl ManualScheduler {
        pub(crate) fn scheduled(&self) -> usize {
            self.slots.lock().len()
        }

        pub(crate) fn is_cancelled(&self, handle: usize) -> bool {
            self.slots.lock()[handle].cancelled
        }

        /// Runs a task whether or not it was cancelled.
        pub(crate) async fn force_run(&self, handle: usize) {
            let task = self.slots.lock()[handle].task.take();
            if let Some(task) = task {
                task.await;
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = usize;

        fn schedule<F>(&self, _delay: Duration, task: F) -> usize
        where
            F: Future<Output = ()> + Send + 'static,
        {
            let mut slots = self.slots.lock();
            slots.push(Slot {
                task: Some(Box::pin(task)),
                cancelled: false,
            });
            slots.len() - 1
        }

        fn cancel(&self, handle: usize) {
            self.slots.lock()[handle].cancelled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use snip_catalog::MemoryFs;

    use super::testing::ManualScheduler;
    use super::*;

    fn fs() -> Arc<MemoryFs> {
        let long: String = (1..=50).map(|i| format!("line {i}\n")).collect();
        Arc::new(
            MemoryFs::new()
                .with_file("/s/a.rs", "fn a() {}")
                .with_file("/s/b.rs", "fn b() {}")
                .with_file("/s/long.txt", long),
        )
    }

    #[tokio::test]
    async fn test_superseded_load_is_not_current() {
        let scheduler = ManualScheduler::default();
        let (mut service, mut rx) =
            PreviewService::new(fs(), scheduler.clone(), &PreviewConfig::default());

        service.on_highlight(Some(Utf8Path::new("/s/a.rs")));
        service.on_highlight(Some(Utf8Path::new("/s/b.rs")));
        assert_eq!(scheduler.scheduled(), 2);
        assert!(scheduler.is_cancelled(0));
        assert!(!scheduler.is_cancelled(1));

        // The first load completes late anyway.
        scheduler.force_run(0).await;
        let stale = rx.recv().await.unwrap();
        assert_eq!(stale.path, "/s/a.rs");
        assert!(!service.is_current(&stale));

        scheduler.force_run(1).await;
        let fresh = rx.recv().await.unwrap();
        assert_eq!(fresh.preview, "fn b() {}");
        assert!(service.is_current(&fresh));
    }

    #[tokio::test]
    async fn test_none_only_cancels() {
        let scheduler = ManualScheduler::default();
        let (mut service, _rx) =
            PreviewService::new(fs(), scheduler.clone(), &PreviewConfig::default());

        service.on_highlight(Some(Utf8Path::new("/s/a.rs")));
        service.on_highlight(None);
        assert_eq!(scheduler.scheduled(), 1);
        assert!(scheduler.is_cancelled(0));
    }

    #[tokio::test]
    async fn test_failed_read_is_silent() {
        let scheduler = ManualScheduler::default();
        let (mut service, mut rx) =
            PreviewService::new(fs(), scheduler.clone(), &PreviewConfig::default());

        service.on_highlight(Some(Utf8Path::new("/s/missing.rs")));
        scheduler.force_run(0).await;
        drop(service);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_preview_is_truncated() {
        let scheduler = ManualScheduler::default();
        let config = PreviewConfig {
            max_lines: 10,
            max_chars: 10_000,
            debounce_ms: 100,
        };
        let (mut service, mut rx) = PreviewService::new(fs(), scheduler.clone(), &config);

        service.on_highlight(Some(Utf8Path::new("/s/long.txt")));
        scheduler.force_run(0).await;
        let loaded = rx.recv().await.unwrap();
        assert_eq!(loaded.preview.lines().count(), 10);
        assert!(loaded.preview.ends_with("line 10"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_highlights_apply_once() {
        let (mut service, mut rx) =
            PreviewService::new(fs(), TokioScheduler, &PreviewConfig::default());

        service.on_highlight(Some(Utf8Path::new("/s/a.rs")));
        tokio::time::sleep(Duration::from_millis(40)).await;
        service.on_highlight(Some(Utf8Path::new("/s/b.rs")));
        tokio::time::sleep(Duration::from_millis(500)).await;

        let loaded = rx.recv().await.unwrap();
        assert_eq!(loaded.path, "/s/b.rs");
        assert!(service.is_current(&loaded));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_waits_for_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        TokioScheduler.schedule(Duration::from_millis(100), async move {
            tx.send(()).unwrap();
        });

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(rx.try_recv().is_ok());
    }
}
