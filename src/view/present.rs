//! Classification and scaling rules shared by the panels.

use serde::Serialize;

use crate::domain::opportunity::OpportunityKind;
use crate::domain::prices::PriceSnapshot;

/// Colour class of a value: rising, falling, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Up,
    Down,
    Neutral,
}

impl Tone {
    /// Sign of a change; zero and NaN are neutral.
    pub fn of_change(value: f64) -> Self {
        if value > 0.0 {
            Tone::Up
        } else if value < 0.0 {
            Tone::Down
        } else {
            Tone::Neutral
        }
    }

    pub fn of_kind(kind: OpportunityKind) -> Self {
        match kind {
            OpportunityKind::Buy => Tone::Up,
            OpportunityKind::Sell => Tone::Down,
            OpportunityKind::Neutral => Tone::Neutral,
        }
    }
}

/// Icon direction of the price-difference card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
}

impl Trend {
    /// Rising only while the centralized venue trades at a premium.
    pub fn of_snapshot(snapshot: &PriceSnapshot) -> Self {
        if snapshot.centralized_premium() {
            Trend::Rising
        } else {
            Trend::Falling
        }
    }
}

/// Gauge status against a low/high threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}

impl IndicatorStatus {
    /// Neutral when absent, bad at or beyond either threshold, good between.
    pub fn classify(value: Option<f64>, low: f64, high: f64) -> Self {
        match value {
            None => IndicatorStatus::Neutral,
            Some(v) if v <= low || v >= high => IndicatorStatus::Bad,
            Some(_) => IndicatorStatus::Good,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            IndicatorStatus::Good => Tone::Up,
            IndicatorStatus::Bad => Tone::Down,
            IndicatorStatus::Neutral => Tone::Neutral,
        }
    }
}

/// Progress-bar fill, `(value - min) / (max - min) * 100`.
///
/// Not clamped: values outside `[min, max]` give fills outside `[0, 100]`.
pub fn progress_percent(value: Option<f64>, min: f64, max: f64) -> f64 {
    match value {
        None => 0.0,
        Some(v) => (v - min) / (max - min) * 100.0,
    }
}

pub fn opportunity_label(kind: OpportunityKind) -> &'static str {
    match kind {
        OpportunityKind::Buy => "BUY OPPORTUNITY",
        OpportunityKind::Sell => "SELL OPPORTUNITY",
        OpportunityKind::Neutral => "NO OPPORTUNITY",
    }
}
