//! Indicators domain: RSI and EMA as computed upstream.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Technical indicators. Opaque, display-only numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// Relative Strength Index, conventionally 0–100.
    pub rsi: f64,
    /// Exponential Moving Average, in price units.
    pub ema: f64,
}

impl From<wire::IndicatorsResponse> for IndicatorSet {
    fn from(r: wire::IndicatorsResponse) -> Self {
        Self {
            rsi: r.rsi,
            ema: r.ema,
        }
    }
}
