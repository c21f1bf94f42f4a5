//! Scripted `PriceFeed` shared by the sync and poller tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tokio::sync::oneshot;

use oracle_dashboard::prelude::*;

/// How the `prices` fetch of one cycle behaves.
pub enum Step {
    /// Resolve immediately with this centralized price.
    Ready(f64),
    /// Resolve with this price once the sender fires (or is dropped).
    Gated(f64, oneshot::Receiver<()>),
    /// Never resolve.
    Hang,
}

/// Feed whose `prices` calls follow a script; the other slices are constant.
///
/// Each snapshot is built with a decentralized price 100 below the
/// centralized one, so the spread is always 200 / 100.
pub struct ScriptedFeed {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    pub history: HistoricalSeries,
}

impl ScriptedFeed {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            history: HistoricalSeries::default(),
        }
    }

    /// Every cycle resolves immediately at 65000.
    pub fn instant() -> Self {
        Self::new(vec![])
    }

    pub fn with_history(mut self, history: HistoricalSeries) -> Self {
        self.history = history;
        self
    }

    /// Number of cycles that reached the feed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn snapshot(price: f64) -> PriceSnapshot {
    PriceSnapshot::from_prices(price, price - 100.0)
}

impl PriceFeed for ScriptedFeed {
    fn prices(&self) -> impl Future<Output = Fetched<PriceSnapshot>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Step::Ready(65000.0));
        async move {
            match step {
                Step::Ready(price) => Fetched::Live(snapshot(price)),
                Step::Gated(price, gate) => {
                    let _ = gate.await;
                    Fetched::Live(snapshot(price))
                }
                Step::Hang => futures_util::future::pending().await,
            }
        }
    }

    fn history(&self) -> impl Future<Output = Fetched<HistoricalSeries>> + Send {
        let history = self.history.clone();
        async move { Fetched::Live(history) }
    }

    fn indicators(&self) -> impl Future<Output = Fetched<IndicatorSet>> + Send {
        async { Fetched::Live(IndicatorSet { rsi: 50.0, ema: 64900.0 }) }
    }

    fn opportunity(&self) -> impl Future<Output = Fetched<OpportunitySignal>> + Send {
        async { Fetched::Live(OpportunitySignal::default()) }
    }
}
