//! Display state container: owned by the sync layer, replaced per cycle.

use chrono::{DateTime, Utc};

use crate::domain::history::HistoricalSeries;
use crate::domain::indicators::IndicatorSet;
use crate::domain::opportunity::OpportunitySignal;
use crate::domain::prices::PriceSnapshot;
use crate::error::{FetchFailure, Fetched};

/// Refresh state machine: `Idle` ⇄ `Refreshing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPhase {
    #[default]
    Idle,
    Refreshing,
}

/// What to do with a cycle that finishes after a newer one already committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Drop it. Cycles are tagged with increasing ids.
    #[default]
    DiscardStale,
    /// Commit anyway; whichever cycle settles last wins.
    LastWriteWins,
}

/// Failure tag per slice for the last committed cycle (`None` = live data).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceFailures {
    pub prices: Option<FetchFailure>,
    pub history: Option<FetchFailure>,
    pub indicators: Option<FetchFailure>,
    pub opportunity: Option<FetchFailure>,
}

impl SliceFailures {
    pub fn count(&self) -> usize {
        [
            self.prices.is_some(),
            self.history.is_some(),
            self.indicators.is_some(),
            self.opportunity.is_some(),
        ]
        .iter()
        .filter(|failed| **failed)
        .count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

/// The four fetch results of one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    pub prices: Fetched<PriceSnapshot>,
    pub history: Fetched<HistoricalSeries>,
    pub indicators: Fetched<IndicatorSet>,
    pub opportunity: Fetched<OpportunitySignal>,
}

/// Result of offering a finished cycle to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitResult {
    Committed,
    Stale { newer: u64 },
}

/// Last known dashboard data.
///
/// Each slice is replaced whole from a single cycle, so a slice never mixes
/// data from two cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub prices: PriceSnapshot,
    pub history: HistoricalSeries,
    pub indicators: IndicatorSet,
    pub opportunity: OpportunitySignal,
    pub failures: SliceFailures,
    pub last_updated: DateTime<Utc>,
    /// Id of the cycle currently shown; 0 before the first commit.
    pub committed_cycle: u64,
    last_issued: u64,
    in_flight: u32,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Zeroed/empty slices, `last_updated` set to now.
    pub fn new() -> Self {
        Self {
            prices: PriceSnapshot::default(),
            history: HistoricalSeries::default(),
            indicators: IndicatorSet::default(),
            opportunity: OpportunitySignal::default(),
            failures: SliceFailures::default(),
            last_updated: Utc::now(),
            committed_cycle: 0,
            last_issued: 0,
            in_flight: 0,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        if self.in_flight > 0 {
            RefreshPhase::Refreshing
        } else {
            RefreshPhase::Idle
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase() == RefreshPhase::Refreshing
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    /// Issue the next cycle id and mark it in flight.
    pub fn begin_cycle(&mut self) -> u64 {
        self.last_issued += 1;
        self.in_flight += 1;
        self.last_issued
    }

    /// Retire a cycle without committing anything (cancelled).
    pub fn abandon_cycle(&mut self, _cycle: u64) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Retire a cycle and write its results, unless the policy rejects it.
    pub fn commit(
        &mut self,
        cycle: u64,
        outcome: RefreshOutcome,
        policy: StalePolicy,
        now: DateTime<Utc>,
    ) -> CommitResult {
        self.in_flight = self.in_flight.saturating_sub(1);

        if policy == StalePolicy::DiscardStale && cycle < self.committed_cycle {
            return CommitResult::Stale {
                newer: self.committed_cycle,
            };
        }

        let (prices, prices_failure) = outcome.prices.into_parts();
        let (history, history_failure) = outcome.history.into_parts();
        let (indicators, indicators_failure) = outcome.indicators.into_parts();
        let (opportunity, opportunity_failure) = outcome.opportunity.into_parts();

        self.prices = prices;
        self.history = history;
        self.indicators = indicators;
        self.opportunity = opportunity;
        self.failures = SliceFailures {
            prices: prices_failure,
            history: history_failure,
            indicators: indicators_failure,
            opportunity: opportunity_failure,
        };
        self.last_updated = now;
        self.committed_cycle = cycle;

        CommitResult::Committed
    }
}
