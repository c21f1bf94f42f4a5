//! Opportunity domain: buy/sell/neutral signal and its strength.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Backend-asserted opportunity classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    Buy,
    Sell,
    #[default]
    Neutral,
}

impl OpportunityKind {
    /// Buy is checked before sell: if both flags are set, buy wins.
    pub fn from_flags(buy: bool, sell: bool) -> Self {
        if buy {
            OpportunityKind::Buy
        } else if sell {
            OpportunityKind::Sell
        } else {
            OpportunityKind::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opportunity signal as displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpportunitySignal {
    pub kind: OpportunityKind,
    /// 0–100.
    pub strength: f64,
}

impl OpportunitySignal {
    /// `min(|price_difference * 100|, 100)`.
    pub fn strength_from_difference(price_difference: f64) -> f64 {
        (price_difference * 100.0).abs().min(100.0)
    }

    /// Strength as a 0–1 fraction, used for bar widths.
    pub fn strength_fraction(&self) -> f64 {
        self.strength / 100.0
    }

    pub fn is_actionable(&self) -> bool {
        self.kind != OpportunityKind::Neutral
    }
}
