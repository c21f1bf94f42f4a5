//! Domain modules organized as vertical slices, one per backend endpoint.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types as the dashboard displays them
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: Wire → domain conversions (where there is logic)
//! - `client.rs`: Sub-client with the fetch operation

pub mod history;
pub mod indicators;
pub mod opportunity;
pub mod prices;
