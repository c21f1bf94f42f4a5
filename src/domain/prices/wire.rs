//! Wire types for `GET /prices`.

use serde::{Deserialize, Serialize};

/// A single venue quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: f64,
}

/// REST response: `{ centralized: {price}, dex: {price} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricesResponse {
    pub centralized: PriceQuote,
    pub dex: PriceQuote,
}
