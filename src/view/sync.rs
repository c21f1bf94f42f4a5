//! `DashboardSync`: runs refresh cycles against a [`PriceFeed`] and owns the
//! display state.
//!
//! A cycle issues all four fetches concurrently, waits for all of them, then
//! writes the four slices under one lock. Cycles are tagged with increasing ids
//! so a slow cycle cannot overwrite a newer one (see [`StalePolicy`]), and every
//! in-flight cycle is abortable so nothing writes into a torn-down view.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_lock::RwLock;
use futures_util::future::{AbortHandle, Abortable};

use crate::config::DashboardConfig;
use crate::feed::PriceFeed;
use crate::view::chart::ChartConfig;
use crate::view::state::{CommitResult, DisplayState, RefreshOutcome};
use crate::view::widgets::DashboardView;

pub use crate::view::state::StalePolicy;

/// Settings for the sync layer and the poller that drives it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub refresh_interval: Duration,
    pub stale_policy: StalePolicy,
    pub chart: ChartConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(crate::network::DEFAULT_REFRESH_INTERVAL_MS),
            stale_policy: StalePolicy::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl From<&DashboardConfig> for SyncConfig {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            refresh_interval: config.refresh_interval,
            ..Self::default()
        }
    }
}

/// What started a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Mount,
    Manual,
    Timer,
}

/// How a refresh ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReport {
    /// Results written to the display state.
    Committed { cycle: u64, failures: usize },
    /// A newer cycle had already committed; results dropped.
    Discarded { cycle: u64, newer: u64 },
    /// The view was torn down while the cycle was in flight.
    Cancelled { cycle: u64 },
    /// Not started: manual trigger while refreshing, or already torn down.
    Skipped,
}

pub struct DashboardSync<F: PriceFeed> {
    feed: F,
    config: SyncConfig,
    state: RwLock<DisplayState>,
    in_flight: Mutex<HashMap<u64, AbortHandle>>,
    torn_down: AtomicBool,
}

impl<F: PriceFeed> DashboardSync<F> {
    pub fn new(feed: F, config: SyncConfig) -> Self {
        Self {
            feed,
            config,
            state: RwLock::new(DisplayState::new()),
            in_flight: Mutex::new(HashMap::new()),
            torn_down: AtomicBool::new(false),
        }
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Copy of the current display state.
    pub async fn state(&self) -> DisplayState {
        self.state.read().await.clone()
    }

    /// Render the panels from the current display state.
    pub async fn view(&self) -> DashboardView {
        let state = self.state.read().await;
        DashboardView::render(&state, &self.config.chart)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Run one refresh cycle.
    pub async fn refresh(&self, trigger: RefreshTrigger) -> RefreshReport {
        if self.is_torn_down() {
            return RefreshReport::Skipped;
        }

        let cycle = {
            let mut state = self.state.write().await;
            if trigger == RefreshTrigger::Manual && state.is_refreshing() {
                tracing::debug!("Refresh already in flight, ignoring manual trigger");
                return RefreshReport::Skipped;
            }
            state.begin_cycle()
        };
        tracing::debug!(cycle, ?trigger, "Refresh started");

        let (handle, registration) = AbortHandle::new_pair();
        self.register(cycle, handle.clone());
        let mut guard = CycleGuard {
            sync: self,
            cycle,
            armed: true,
        };
        // Teardown may have raced the registration above.
        if self.is_torn_down() {
            handle.abort();
        }

        let feed = &self.feed;
        let fetch_all = async {
            let (prices, history, indicators, opportunity) = futures_util::join!(
                feed.prices(),
                feed.history(),
                feed.indicators(),
                feed.opportunity()
            );
            RefreshOutcome {
                prices,
                history,
                indicators,
                opportunity,
            }
        };
        let result = Abortable::new(fetch_all, registration).await;
        self.unregister(cycle);

        let mut state = self.state.write().await;
        // No await below: the cycle is retired on every path from here.
        guard.armed = false;
        let outcome = match result {
            Ok(outcome) if !self.is_torn_down() => outcome,
            _ => {
                state.abandon_cycle(cycle);
                tracing::info!(cycle, "View torn down, dropping refresh results");
                return RefreshReport::Cancelled { cycle };
            }
        };

        match state.commit(cycle, outcome, self.config.stale_policy, chrono::Utc::now()) {
            CommitResult::Committed => {
                let failures = state.failures.count();
                tracing::debug!(cycle, failures, "Refresh committed");
                RefreshReport::Committed { cycle, failures }
            }
            CommitResult::Stale { newer } => {
                tracing::info!(cycle, newer, "Discarding stale refresh");
                RefreshReport::Discarded { cycle, newer }
            }
        }
    }

    /// Stop accepting refreshes and abort every in-flight cycle.
    pub fn teardown(&self) {
        if self.torn_down.swap(true, Ordering::SeqCst) {
            return;
        }
        let handles: Vec<AbortHandle> = self.lock_in_flight().drain().map(|(_, h)| h).collect();
        if !handles.is_empty() {
            tracing::info!("Aborting {} in-flight refresh(es)", handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }

    fn register(&self, cycle: u64, handle: AbortHandle) {
        self.lock_in_flight().insert(cycle, handle);
    }

    fn unregister(&self, cycle: u64) {
        self.lock_in_flight().remove(&cycle);
    }

    fn lock_in_flight(&self) -> std::sync::MutexGuard<'_, HashMap<u64, AbortHandle>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Retires a cycle whose future is dropped before it could commit, e.g. when
/// the task running it is aborted.
struct CycleGuard<'a, F: PriceFeed> {
    sync: &'a DashboardSync<F>,
    cycle: u64,
    armed: bool,
}

impl<F: PriceFeed> Drop for CycleGuard<'_, F> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.sync.unregister(self.cycle);
        match self.sync.state.try_write() {
            Some(mut state) => state.abandon_cycle(self.cycle),
            None => tracing::warn!(cycle = self.cycle, "State locked, dropped cycle not retired"),
        }
        tracing::debug!(cycle = self.cycle, "Refresh dropped before completion");
    }
}
