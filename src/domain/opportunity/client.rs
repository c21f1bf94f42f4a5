//! Opportunity sub-client.

use crate::client::DashboardClient;
use crate::domain::opportunity::OpportunitySignal;
use crate::error::{DashboardError, Fetched};
use crate::network::paths;

pub struct Opportunity<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Opportunity<'a> {
    pub async fn try_get(&self) -> Result<OpportunitySignal, DashboardError> {
        Ok(self.client.http.get_opportunity().await?.into())
    }

    /// Never fails: on error returns a neutral signal with zero strength.
    pub async fn fetch(&self) -> Fetched<OpportunitySignal> {
        Fetched::or_default(paths::OPPORTUNITY, self.try_get().await)
    }
}
