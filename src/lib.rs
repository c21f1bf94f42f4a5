//! # Oracle Dashboard
//!
//! Polling client and view-state layer for the WBTC oracle price monitoring
//! dashboard. The backend computes prices, RSI/EMA and opportunity signals; this
//! crate fetches them every two seconds, keeps the last known display state and
//! derives everything the dashboard panels show.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Formatting helpers and domain slices (always available)
//! 2. **Feed**: `PriceFeed`, the seam between data access and view sync
//! 3. **HTTP API**: `DashboardHttp`, one method per backend endpoint
//! 4. **High-Level Client**: `DashboardClient` with nested sub-clients
//! 5. **View**: `DashboardSync`, the refresh `Poller` and panel view models
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oracle_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:3000/api")
//!     .build()?;
//!
//! let poller = Poller::start(client, SyncConfig::default());
//! let view = poller.sync().view().await;
//! println!("{view}");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared display formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types and the fetch outcome wrapper.
pub mod error;

/// Default endpoint and timing constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: Feed ────────────────────────────────────────────────────────────

/// The data source seam used by the view layer.
pub mod feed;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient`: the primary entry point for data access.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: View ────────────────────────────────────────────────────────────

/// Display state, refresh cycles and derived presentation.
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::history::{HistoricalSeries, PricePoint};
    pub use crate::domain::indicators::IndicatorSet;
    pub use crate::domain::opportunity::{OpportunityKind, OpportunitySignal};
    pub use crate::domain::prices::PriceSnapshot;

    // Errors + fetch outcomes
    pub use crate::error::{DashboardError, FailureKind, Fetched, HttpError};

    // Config
    pub use crate::config::DashboardConfig;
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_REFRESH_INTERVAL_MS};

    // Feed seam
    pub use crate::feed::PriceFeed;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        DashboardClient, DashboardClientBuilder, HistoryClient, IndicatorsClient,
        OpportunityClient, PricesClient,
    };

    // View layer
    pub use crate::view::chart::{ChartConfig, ChartPoint};
    pub use crate::view::present::{IndicatorStatus, Tone, Trend};
    pub use crate::view::state::{DisplayState, RefreshPhase, SliceFailures};
    pub use crate::view::sync::{
        DashboardSync, RefreshReport, RefreshTrigger, StalePolicy, SyncConfig,
    };
    pub use crate::view::widgets::DashboardView;

    #[cfg(feature = "native")]
    pub use crate::view::poller::{Poller, SyncEvent};
}
