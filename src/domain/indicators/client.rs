//! Indicators sub-client.

use crate::client::DashboardClient;
use crate::domain::indicators::IndicatorSet;
use crate::error::{DashboardError, Fetched};
use crate::network::paths;

pub struct Indicators<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Indicators<'a> {
    pub async fn try_get(&self) -> Result<IndicatorSet, DashboardError> {
        Ok(self.client.http.get_indicators().await?.into())
    }

    /// Never fails: on error returns `{rsi: 0, ema: 0}`.
    pub async fn fetch(&self) -> Fetched<IndicatorSet> {
        Fetched::or_default(paths::INDICATORS, self.try_get().await)
    }
}
