//! Chart series: pairs each centralized sample with a decentralized one.

use chrono::DateTime;
use serde::Serialize;

use crate::domain::history::HistoricalSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Only the most recent `window` centralized points are plotted.
    pub window: usize,
    /// A decentralized point pairs when `|Δt| < tolerance_ms`.
    pub tolerance_ms: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            window: 100,
            tolerance_ms: 60_000,
        }
    }
}

/// One plotted x-position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub timestamp: i64,
    pub centralized: f64,
    /// 0 when no decentralized sample fell inside the tolerance window.
    pub dex: f64,
    pub difference: f64,
}

/// Join the two series on the centralized timestamps.
///
/// For each centralized point the *first* decentralized point within the
/// tolerance is used, in backend order, not the nearest one. O(n·m).
pub fn join_series(series: &HistoricalSeries, config: &ChartConfig) -> Vec<ChartPoint> {
    let decentralized = &series.decentralized;

    series
        .recent_centralized(config.window)
        .iter()
        .map(|c| {
            let dex = decentralized
                .iter()
                .find(|d| d.timestamp.abs_diff(c.timestamp) < config.tolerance_ms)
                .map(|d| d.price)
                .unwrap_or(0.0);
            ChartPoint {
                timestamp: c.timestamp,
                centralized: c.price,
                dex,
                difference: c.price - dex,
            }
        })
        .collect()
}

/// Axis label `H:MM` (UTC) for an epoch-millis timestamp.
pub fn format_axis_time(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(t) => t.format("%-H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Everything the price chart panel plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub points: Vec<ChartPoint>,
    /// Horizontal EMA reference line; absent when the EMA is zero.
    pub ema_line: Option<f64>,
    pub time_labels: Vec<String>,
}

impl ChartView {
    pub fn build(series: &HistoricalSeries, ema: f64, config: &ChartConfig) -> Self {
        let points = join_series(series, config);
        let time_labels = points.iter().map(|p| format_axis_time(p.timestamp)).collect();
        Self {
            points,
            ema_line: (ema != 0.0).then_some(ema),
            time_labels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
