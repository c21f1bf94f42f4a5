//! Wire types for `GET /opportunity`.

use serde::{Deserialize, Serialize};

/// REST response for the opportunity check.
///
/// Missing flags read as `false`. `strength` is sent by some backend versions
/// but the dashboard derives its own from `price_difference`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityResponse {
    #[serde(default)]
    pub buy_opportunity: bool,
    #[serde(default)]
    pub sell_opportunity: bool,
    pub price_difference: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
}
