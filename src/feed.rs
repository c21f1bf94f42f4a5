//! `PriceFeed`: the data source the view layer refreshes from.
//!
//! Every method is fail-open: it resolves to a [`Fetched`] value and never
//! errors, so a refresh cycle can join all four without short-circuiting.

use std::future::Future;

use crate::domain::history::HistoricalSeries;
use crate::domain::indicators::IndicatorSet;
use crate::domain::opportunity::OpportunitySignal;
use crate::domain::prices::PriceSnapshot;
use crate::error::Fetched;

pub trait PriceFeed: Send + Sync + 'static {
    fn prices(&self) -> impl Future<Output = Fetched<PriceSnapshot>> + Send;

    fn history(&self) -> impl Future<Output = Fetched<HistoricalSeries>> + Send;

    fn indicators(&self) -> impl Future<Output = Fetched<IndicatorSet>> + Send;

    fn opportunity(&self) -> impl Future<Output = Fetched<OpportunitySignal>> + Send;
}
