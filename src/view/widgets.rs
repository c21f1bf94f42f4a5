//! Panel view models, derived from `DisplayState` on every render.
//!
//! Nothing here is stored: `DashboardView::render` is a pure function of the
//! state, and the text rendering (`Display`) is what the binary prints.

use std::fmt;

use serde::Serialize;

use crate::shared::{display, format_currency, format_signed_percent};
use crate::view::chart::{ChartConfig, ChartView};
use crate::view::present::{
    opportunity_label, progress_percent, IndicatorStatus, Tone, Trend,
};
use crate::view::state::DisplayState;

pub const DASHBOARD_TITLE: &str = "WBTC Oracle";
pub const DASHBOARD_SUBTITLE: &str = "Price monitoring dashboard";
pub const FOOTER_TEXT: &str = "WBTC Scalping Bot - Price Monitoring Dashboard";

/// Static strategy parameters shown beside the indicators.
pub const TRADING_PARAMETERS: [(&str, &str); 3] = [
    ("Min Profit Threshold", "0.60%"),
    ("Max Slippage", "0.20%"),
    ("Trailing Stop Loss", "0.50%"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// `HH:MM:SS` (UTC).
    pub last_updated: String,
    pub refreshing: bool,
    /// The manual refresh control is disabled while a refresh is in flight.
    pub refresh_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCardView {
    pub title: &'static str,
    pub value: String,
    /// Signed percentage change, with its colour.
    pub change: Option<(String, Tone)>,
    pub trend: Option<Trend>,
    pub pulsing: bool,
    /// The value is a fallback from a failed fetch.
    pub stale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorCardView {
    pub title: &'static str,
    pub value: String,
    pub status: IndicatorStatus,
    pub progress_percent: f64,
    pub min: f64,
    pub max: f64,
    pub low_threshold: f64,
    pub high_threshold: f64,
    pub stale: bool,
}

impl IndicatorCardView {
    pub fn range_text(&self) -> String {
        format!("{} - {}", display(self.min), display(self.max))
    }

    pub fn oversold_caption(&self) -> String {
        format!("Oversold (<{})", display(self.low_threshold))
    }

    pub fn overbought_caption(&self) -> String {
        format!("Overbought (>{})", display(self.high_threshold))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityView {
    pub label: &'static str,
    pub tone: Tone,
    pub highlighted: bool,
    /// Strength as a 0–1 fraction of the bar.
    pub bar_fraction: f64,
    pub price_difference: String,
    pub stale: bool,
}

/// The whole page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub header: HeaderView,
    pub price_cards: Vec<PriceCardView>,
    pub opportunity: OpportunityView,
    pub chart: ChartView,
    pub indicators: Vec<IndicatorCardView>,
    pub trading_parameters: Vec<(&'static str, &'static str)>,
    pub footer: &'static str,
}

impl DashboardView {
    pub fn render(state: &DisplayState, chart: &ChartConfig) -> Self {
        let prices = &state.prices;
        let failures = &state.failures;
        let refreshing = state.is_refreshing();

        let header = HeaderView {
            title: DASHBOARD_TITLE,
            subtitle: DASHBOARD_SUBTITLE,
            last_updated: state.last_updated.format("%H:%M:%S").to_string(),
            refreshing,
            refresh_enabled: !refreshing,
        };

        let prices_stale = failures.prices.is_some();
        let price_cards = vec![
            PriceCardView {
                title: "Binance Price (BTC/USDT)",
                value: format_currency(prices.centralized_price),
                change: None,
                trend: None,
                pulsing: true,
                stale: prices_stale,
            },
            PriceCardView {
                title: "DEX Price (WBTC/BUSD)",
                value: format_currency(prices.decentralized_price),
                change: None,
                trend: None,
                pulsing: true,
                stale: prices_stale,
            },
            PriceCardView {
                title: "Price Difference",
                value: format_currency(prices.absolute_difference),
                change: Some((
                    format_signed_percent(prices.percent_difference),
                    Tone::of_change(prices.percent_difference),
                )),
                trend: Some(Trend::of_snapshot(prices)),
                pulsing: false,
                stale: prices_stale,
            },
        ];

        let signal = &state.opportunity;
        let opportunity = OpportunityView {
            label: opportunity_label(signal.kind),
            tone: Tone::of_kind(signal.kind),
            highlighted: signal.is_actionable(),
            bar_fraction: signal.strength_fraction(),
            price_difference: format_signed_percent(prices.percent_difference),
            stale: failures.opportunity.is_some(),
        };

        let indicators_stale = failures.indicators.is_some();
        let rsi = state.indicators.rsi;
        let ema = state.indicators.ema;
        let indicators = vec![
            indicator_card(
                "Relative Strength Index (RSI)",
                rsi,
                (0.0, 100.0),
                (30.0, 70.0),
                format!("{:.2}", rsi),
                indicators_stale,
            ),
            indicator_card(
                "Exponential Moving Average (EMA)",
                ema,
                ((ema * 0.95).floor(), (ema * 1.05).ceil()),
                (ema * 0.98, ema * 1.02),
                format_currency(ema),
                indicators_stale,
            ),
        ];

        Self {
            header,
            price_cards,
            opportunity,
            chart: ChartView::build(&state.history, ema, chart),
            indicators,
            trading_parameters: TRADING_PARAMETERS.to_vec(),
            footer: FOOTER_TEXT,
        }
    }
}

fn indicator_card(
    title: &'static str,
    value: f64,
    (min, max): (f64, f64),
    (low_threshold, high_threshold): (f64, f64),
    formatted: String,
    stale: bool,
) -> IndicatorCardView {
    IndicatorCardView {
        title,
        value: formatted,
        status: IndicatorStatus::classify(Some(value), low_threshold, high_threshold),
        progress_percent: progress_percent(Some(value), min, max),
        min,
        max,
        low_threshold,
        high_threshold,
        stale,
    }
}

// ─── Text rendering ──────────────────────────────────────────────────────────

fn stale_marker(stale: bool) -> &'static str {
    if stale {
        " (stale)"
    } else {
        ""
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.header;
        writeln!(f, "{} | {}", h.title, h.subtitle)?;
        writeln!(
            f,
            "Last updated: {}{}",
            h.last_updated,
            if h.refreshing { "  [refreshing]" } else { "" }
        )?;

        for card in &self.price_cards {
            write!(f, "  {:<26} {:>14}", card.title, card.value)?;
            if let Some((change, _)) = &card.change {
                write!(f, "  {}", change)?;
            }
            writeln!(f, "{}", stale_marker(card.stale))?;
        }

        let o = &self.opportunity;
        writeln!(
            f,
            "  {:<26} {} ({:.0}%)  Price Difference: {}{}",
            "Trading Opportunity",
            o.label,
            o.bar_fraction * 100.0,
            o.price_difference,
            stale_marker(o.stale)
        )?;

        for card in &self.indicators {
            writeln!(
                f,
                "  {:<34} {:>12} [{:?}] {}  {} / {}{}",
                card.title,
                card.value,
                card.status,
                card.range_text(),
                card.oversold_caption(),
                card.overbought_caption(),
                stale_marker(card.stale)
            )?;
        }

        match (self.chart.points.first(), self.chart.points.last()) {
            (Some(_), Some(last)) => writeln!(
                f,
                "  Chart: {} point(s) {}..{}, last spread {}",
                self.chart.points.len(),
                self.chart.time_labels.first().map(String::as_str).unwrap_or(""),
                self.chart.time_labels.last().map(String::as_str).unwrap_or(""),
                format_currency(last.difference)
            )?,
            _ => writeln!(f, "  Chart: no data")?,
        }

        let params = self
            .trading_parameters
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "  {}", params)?;
        write!(f, "{}", self.footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::{HistoricalSeries, PricePoint};
    use crate::domain::indicators::IndicatorSet;
    use crate::domain::opportunity::{OpportunityKind, OpportunitySignal};
    use crate::domain::prices::PriceSnapshot;
    use crate::error::{FailureKind, FetchFailure, Fetched};
    use crate::view::state::{RefreshOutcome, StalePolicy};

    fn committed_state() -> DisplayState {
        let mut state = DisplayState::new();
        let cycle = state.begin_cycle();
        state.commit(
            cycle,
            RefreshOutcome {
                prices: Fetched::Live(PriceSnapshot::from_prices(65000.0, 64800.0)),
                history: Fetched::Live(HistoricalSeries {
                    centralized: vec![PricePoint::new(1000, 65000.0)],
                    decentralized: vec![PricePoint::new(500, 64800.0)],
                }),
                indicators: Fetched::Live(IndicatorSet { rsi: 55.5, ema: 65000.0 }),
                opportunity: Fetched::Live(OpportunitySignal {
                    kind: OpportunityKind::Buy,
                    strength: 30.0,
                }),
            },
            StalePolicy::DiscardStale,
            chrono::Utc::now(),
        );
        state
    }

    #[test]
    fn test_price_cards() {
        let view = DashboardView::render(&committed_state(), &ChartConfig::default());
        assert_eq!(view.price_cards[0].value, "$65,000.00");
        assert_eq!(view.price_cards[1].value, "$64,800.00");
        assert_eq!(view.price_cards[2].value, "$200.00");
        assert_eq!(
            view.price_cards[2].change,
            Some(("+0.31%".to_string(), Tone::Up))
        );
        assert_eq!(view.price_cards[2].trend, Some(Trend::Rising));
        assert!(view.price_cards.iter().all(|c| !c.stale));
    }

    #[test]
    fn test_opportunity_panel() {
        let view = DashboardView::render(&committed_state(), &ChartConfig::default());
        assert_eq!(view.opportunity.label, "BUY OPPORTUNITY");
        assert_eq!(view.opportunity.tone, Tone::Up);
        assert!(view.opportunity.highlighted);
        assert!((view.opportunity.bar_fraction - 0.3).abs() < 1e-9);
        assert_eq!(view.opportunity.price_difference, "+0.31%");
    }

    #[test]
    fn test_indicator_cards() {
        let view = DashboardView::render(&committed_state(), &ChartConfig::default());
        let rsi = &view.indicators[0];
        assert_eq!(rsi.value, "55.50");
        assert_eq!(rsi.status, IndicatorStatus::Good);
        assert!((rsi.progress_percent - 55.5).abs() < 1e-9);
        assert_eq!(rsi.range_text(), "0 - 100");
        assert_eq!(rsi.oversold_caption(), "Oversold (<30)");

        let ema = &view.indicators[1];
        assert_eq!(ema.value, "$65,000.00");
        assert_eq!(ema.min, 61750.0);
        assert_eq!(ema.max, 68250.0);
        assert_eq!(ema.status, IndicatorStatus::Good);
        assert_eq!(ema.overbought_caption(), "Overbought (>66,300)");
    }

    #[test]
    fn test_chart_panel() {
        let view = DashboardView::render(&committed_state(), &ChartConfig::default());
        assert_eq!(view.chart.points.len(), 1);
        assert_eq!(view.chart.points[0].dex, 64800.0);
        assert_eq!(view.chart.ema_line, Some(65000.0));
    }

    #[test]
    fn test_initial_state_renders_sentinels() {
        let view = DashboardView::render(&DisplayState::new(), &ChartConfig::default());
        assert_eq!(view.price_cards[0].value, "$0.00");
        assert_eq!(view.price_cards[2].trend, Some(Trend::Falling));
        assert_eq!(view.opportunity.label, "NO OPPORTUNITY");
        assert!(!view.opportunity.highlighted);
        assert!(view.chart.is_empty());
        assert_eq!(view.chart.ema_line, None);
        assert!(view.header.refresh_enabled);
        // RSI 0 sits on the low threshold.
        assert_eq!(view.indicators[0].status, IndicatorStatus::Bad);
    }

    #[test]
    fn test_failed_slice_marked_stale() {
        let mut state = DisplayState::new();
        let cycle = state.begin_cycle();
        let failure = FetchFailure {
            kind: FailureKind::Transport,
            message: "connection refused".into(),
        };
        state.commit(
            cycle,
            RefreshOutcome {
                prices: Fetched::Fallback {
                    value: PriceSnapshot::default(),
                    failure: failure.clone(),
                },
                history: Fetched::Live(HistoricalSeries::default()),
                indicators: Fetched::Live(IndicatorSet::default()),
                opportunity: Fetched::Fallback {
                    value: OpportunitySignal::default(),
                    failure,
                },
            },
            StalePolicy::DiscardStale,
            chrono::Utc::now(),
        );
        let view = DashboardView::render(&state, &ChartConfig::default());
        assert!(view.price_cards.iter().all(|c| c.stale));
        assert!(view.opportunity.stale);
        assert!(view.indicators.iter().all(|c| !c.stale));
    }

    #[test]
    fn test_refresh_control_disabled_while_refreshing() {
        let mut state = DisplayState::new();
        state.begin_cycle();
        let view = DashboardView::render(&state, &ChartConfig::default());
        assert!(view.header.refreshing);
        assert!(!view.header.refresh_enabled);
    }

    #[test]
    fn test_text_rendering() {
        let text = DashboardView::render(&committed_state(), &ChartConfig::default()).to_string();
        assert!(text.starts_with("WBTC Oracle"));
        assert!(text.contains("$65,000.00"));
        assert!(text.contains("BUY OPPORTUNITY (30%)"));
        assert!(text.contains("Min Profit Threshold: 0.60%"));
        assert!(text.ends_with(FOOTER_TEXT));
    }
}
