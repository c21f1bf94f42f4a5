//! Historical domain: per-venue price series for the chart.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// An immutable price sample produced by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: i64, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// Both venue series as returned by the backend.
///
/// The two sequences are timestamped independently; nothing guarantees equal
/// lengths or aligned timestamps. Empty series are the fetch fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub centralized: Vec<PricePoint>,
    pub decentralized: Vec<PricePoint>,
}

impl HistoricalSeries {
    pub fn is_empty(&self) -> bool {
        self.centralized.is_empty() && self.decentralized.is_empty()
    }

    /// Most recent `n` centralized points, in backend order.
    pub fn recent_centralized(&self, n: usize) -> &[PricePoint] {
        let start = self.centralized.len().saturating_sub(n);
        &self.centralized[start..]
    }
}
