//! Prices domain: current centralized vs decentralized quote.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Both venue prices for one fetch cycle plus their spread.
///
/// The all-zero value is the fallback used when the fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub centralized_price: f64,
    pub decentralized_price: f64,
    /// `centralized - decentralized`.
    pub absolute_difference: f64,
    /// `(centralized - decentralized) / decentralized * 100`.
    pub percent_difference: f64,
}

impl PriceSnapshot {
    /// Derive the spread from the two venue prices.
    ///
    /// A zero decentralized price is not guarded: the percentage follows IEEE
    /// division and comes out as ±infinity or NaN.
    pub fn from_prices(centralized: f64, decentralized: f64) -> Self {
        let absolute_difference = centralized - decentralized;
        Self {
            centralized_price: centralized,
            decentralized_price: decentralized,
            absolute_difference,
            percent_difference: absolute_difference / decentralized * 100.0,
        }
    }

    /// Whether the centralized venue trades above the decentralized one.
    pub fn centralized_premium(&self) -> bool {
        self.absolute_difference > 0.0
    }
}
