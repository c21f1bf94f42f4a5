//! View synchronization layer.
//!
//! - `state`: `DisplayState`, the last committed data plus cycle bookkeeping
//! - `sync`: `DashboardSync`, one concurrent refresh cycle against a `PriceFeed`
//! - `poller`: the fixed-period refresh timer (tokio, `native` feature)
//! - `chart`, `present`, `widgets`: values derived from state on every render

pub mod chart;
pub mod present;
pub mod state;
pub mod sync;
pub mod widgets;

#[cfg(feature = "native")]
pub mod poller;
