//! Refresh poller: the fixed-period timer behind the dashboard.
//!
//! - Background tokio task owning the timer
//! - First refresh immediately on start, then one per `refresh_interval`
//! - No backoff and no jitter; a slow cycle does not delay the next tick
//! - Each cycle runs as its own task, so cycles may overlap
//! - Manual refresh requests through a command channel
//! - Stream-based event delivery to the consumer

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::Stream;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::error::DashboardError;
use crate::feed::PriceFeed;
use crate::view::sync::{DashboardSync, RefreshReport, RefreshTrigger, SyncConfig};

/// How long `stop()` waits for in-flight cycles to wind down.
const STOP_TIMEOUT: Duration = Duration::from_secs(5);

// ─── Commands from public API to background task ─────────────────────────────

enum Command {
    Refresh,
    Stop,
}

/// Events emitted by the poller to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// New data is in the display state.
    Committed {
        cycle: u64,
        trigger: RefreshTrigger,
        failures: usize,
    },
    /// A cycle finished after a newer one and was dropped.
    Discarded { cycle: u64 },
    /// A cycle was aborted by teardown.
    Cancelled { cycle: u64 },
    /// A manual refresh was ignored because one was already running.
    Skipped { trigger: RefreshTrigger },
    /// The timer has stopped; no further events follow.
    Stopped,
}

// ─── Public Poller ───────────────────────────────────────────────────────────

/// Drives a [`DashboardSync`] on a timer.
///
/// Must be started from within a tokio runtime. Dropping the poller cancels
/// the timer and tears the sync down, so late results are never written.
pub struct Poller<F: PriceFeed> {
    sync: Arc<DashboardSync<F>>,
    cmd_tx: Option<mpsc::Sender<Command>>,
    event_rx: tokio::sync::Mutex<mpsc::Receiver<SyncEvent>>,
    task_handle: Option<JoinHandle<()>>,
}

impl<F: PriceFeed> Poller<F> {
    /// Build a sync for `feed` and start polling it.
    pub fn start(feed: F, config: SyncConfig) -> Self {
        Self::from_sync(Arc::new(DashboardSync::new(feed, config)))
    }

    /// Start polling an existing sync.
    pub fn from_sync(sync: Arc<DashboardSync<F>>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(256);
        let interval = sync.config().refresh_interval;

        tracing::info!(interval_ms = interval.as_millis() as u64, "Starting refresh poller");
        let handle = tokio::spawn(run_task(Arc::clone(&sync), interval, cmd_rx, event_tx));

        Self {
            sync,
            cmd_tx: Some(cmd_tx),
            event_rx: tokio::sync::Mutex::new(event_rx),
            task_handle: Some(handle),
        }
    }

    pub fn sync(&self) -> &Arc<DashboardSync<F>> {
        &self.sync
    }

    pub fn is_running(&self) -> bool {
        self.cmd_tx.is_some()
    }

    /// Request a manual refresh. Ignored if a refresh is already running.
    pub fn refresh_now(&self) -> Result<(), DashboardError> {
        match &self.cmd_tx {
            Some(tx) => tx.try_send(Command::Refresh).map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => {
                    DashboardError::Other("Refresh request queue full".into())
                }
                mpsc::error::TrySendError::Closed(_) => {
                    DashboardError::Other("Poller stopped".into())
                }
            }),
            None => Err(DashboardError::Other("Poller stopped".into())),
        }
    }

    /// Stop the timer, abort in-flight cycles and wait for the task to end.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.cmd_tx.take() {
            let _ = tx.send(Command::Stop).await;
        }
        if let Some(mut handle) = self.task_handle.take() {
            if tokio::time::timeout(STOP_TIMEOUT, &mut handle).await.is_err() {
                tracing::warn!("Poller task did not stop in time, aborting");
                handle.abort();
            }
        }
        self.sync.teardown();
    }

    /// Wait for the next event. `None` once the poller has stopped and all
    /// events were drained.
    pub async fn next_event(&self) -> Option<SyncEvent> {
        self.event_rx.lock().await.recv().await
    }

    /// Stream of events. Borrows `self`, so drop it before calling `stop()`.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = SyncEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(
            &self.event_rx,
            |rx| async move {
                let mut guard = rx.lock().await;
                guard.recv().await.map(|event| (event, rx))
            },
        ))
    }
}

impl<F: PriceFeed> Drop for Poller<F> {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
        self.sync.teardown();
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

async fn run_task<F: PriceFeed>(
    sync: Arc<DashboardSync<F>>,
    interval: Duration,
    mut cmd_rx: mpsc::Receiver<Command>,
    event_tx: mpsc::Sender<SyncEvent>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut cycles = JoinSet::new();
    let mut mounted = false;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let trigger = if mounted { RefreshTrigger::Timer } else { RefreshTrigger::Mount };
                mounted = true;
                cycles.spawn(run_cycle(Arc::clone(&sync), trigger, event_tx.clone()));
            }

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(Command::Refresh) => {
                        cycles.spawn(run_cycle(Arc::clone(&sync), RefreshTrigger::Manual, event_tx.clone()));
                    }
                    // Stop requested, or the Poller was dropped.
                    Some(Command::Stop) | None => break,
                }
            }

            Some(joined) = cycles.join_next(), if !cycles.is_empty() => {
                if let Err(e) = joined {
                    tracing::error!("Refresh task failed: {}", e);
                }
            }
        }
    }

    tracing::info!("Stopping refresh poller");
    sync.teardown();
    while cycles.join_next().await.is_some() {}
    let _ = event_tx.try_send(SyncEvent::Stopped);
}

async fn run_cycle<F: PriceFeed>(
    sync: Arc<DashboardSync<F>>,
    trigger: RefreshTrigger,
    event_tx: mpsc::Sender<SyncEvent>,
) {
    let event = match sync.refresh(trigger).await {
        RefreshReport::Committed { cycle, failures } => SyncEvent::Committed {
            cycle,
            trigger,
            failures,
        },
        RefreshReport::Discarded { cycle, .. } => SyncEvent::Discarded { cycle },
        RefreshReport::Cancelled { cycle } => SyncEvent::Cancelled { cycle },
        RefreshReport::Skipped => SyncEvent::Skipped { trigger },
    };
    let _ = event_tx.try_send(event);
}
