//! Prices sub-client: current venue quotes.

use crate::client::DashboardClient;
use crate::domain::prices::PriceSnapshot;
use crate::error::{DashboardError, Fetched};
use crate::network::paths;

pub struct Prices<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Prices<'a> {
    /// Fetch both prices and derive the spread.
    pub async fn try_get(&self) -> Result<PriceSnapshot, DashboardError> {
        Ok(self.client.http.get_prices().await?.into())
    }

    /// Like [`try_get`](Self::try_get), but never fails: errors are logged
    /// and replaced by the zeroed snapshot.
    pub async fn fetch(&self) -> Fetched<PriceSnapshot> {
        Fetched::or_default(paths::PRICES, self.try_get().await)
    }
}
