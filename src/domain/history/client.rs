//! Historical sub-client: chart series.

use crate::client::DashboardClient;
use crate::domain::history::HistoricalSeries;
use crate::error::{DashboardError, Fetched};
use crate::network::paths;

pub struct History<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> History<'a> {
    pub async fn try_get(&self) -> Result<HistoricalSeries, DashboardError> {
        Ok(self.client.http.get_historical().await?.into())
    }

    /// Never fails: on error both series come back empty.
    pub async fn fetch(&self) -> Fetched<HistoricalSeries> {
        Fetched::or_default(paths::HISTORICAL, self.try_get().await)
    }
}
