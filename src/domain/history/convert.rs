//! Conversions from wire types to domain types for historical series.

use super::wire::{HistoricalResponse, PriceSample};
use super::{HistoricalSeries, PricePoint};

impl From<PriceSample> for PricePoint {
    fn from(s: PriceSample) -> Self {
        PricePoint::new(s.timestamp, s.price)
    }
}

impl From<HistoricalResponse> for HistoricalSeries {
    fn from(r: HistoricalResponse) -> Self {
        // Pass-through: order and spacing are kept exactly as sent.
        Self {
            centralized: r.binance.into_iter().map(PricePoint::from).collect(),
            decentralized: r.dex.into_iter().map(PricePoint::from).collect(),
        }
    }
}
