//! Wire types for `GET /indicators`.

use serde::{Deserialize, Serialize};

/// REST response: `{ rsi, ema }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorsResponse {
    pub rsi: f64,
    pub ema: f64,
}
