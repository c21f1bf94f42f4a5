//! Wire types for `GET /historical`.

use serde::{Deserialize, Serialize};

/// A raw `{timestamp, price}` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    #[serde(deserialize_with = "crate::shared::serde_util::epoch_ms::deserialize")]
    pub timestamp: i64,
    pub price: f64,
}

/// REST response: one sample array per venue.
///
/// The centralized series is keyed `binance` by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalResponse {
    pub binance: Vec<PriceSample>,
    pub dex: Vec<PriceSample>,
}
