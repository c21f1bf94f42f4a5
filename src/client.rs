//! High-level client: `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods and the `PriceFeed`
//! implementation the view layer refreshes from.

use crate::domain::history::client::History;
use crate::domain::history::HistoricalSeries;
use crate::domain::indicators::client::Indicators;
use crate::domain::indicators::IndicatorSet;
use crate::domain::opportunity::client::Opportunity;
use crate::domain::opportunity::OpportunitySignal;
use crate::domain::prices::client::Prices;
use crate::domain::prices::PriceSnapshot;
use crate::error::{DashboardError, Fetched};
use crate::feed::PriceFeed;
use crate::http::DashboardHttp;

use std::future::Future;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::indicators::client::Indicators as IndicatorsClient;
pub use crate::domain::opportunity::client::Opportunity as OpportunityClient;
pub use crate::domain::prices::client::Prices as PricesClient;

/// The primary entry point for backend data access.
///
/// The base URL is injected at construction; nothing reads a global.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: DashboardHttp,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn indicators(&self) -> Indicators<'_> {
        Indicators { client: self }
    }

    pub fn opportunity(&self) -> Opportunity<'_> {
        Opportunity { client: self }
    }
}

impl PriceFeed for DashboardClient {
    fn prices(&self) -> impl Future<Output = Fetched<PriceSnapshot>> + Send {
        async move { DashboardClient::prices(self).fetch().await }
    }

    fn history(&self) -> impl Future<Output = Fetched<HistoricalSeries>> + Send {
        async move { DashboardClient::history(self).fetch().await }
    }

    fn indicators(&self) -> impl Future<Output = Fetched<IndicatorSet>> + Send {
        async move { DashboardClient::indicators(self).fetch().await }
    }

    fn opportunity(&self) -> impl Future<Output = Fetched<OpportunitySignal>> + Send {
        async move { DashboardClient::opportunity(self).fetch().await }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    base_url: String,
    request_timeout: Duration,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(crate::network::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl DashboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<DashboardClient, DashboardError> {
        if self.base_url.trim().is_empty() {
            return Err(DashboardError::Config("base URL must not be empty".into()));
        }
        Ok(DashboardClient {
            http: DashboardHttp::new(&self.base_url, self.request_timeout)?,
        })
    }
}
