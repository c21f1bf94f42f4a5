//! Number formatting for human-readable display.
//!
//! `num` handles plain numbers (grouping, auto decimal places); `money` builds
//! the currency and percentage strings shown on the dashboard cards.

pub mod money;
pub mod num;
