//! Shared helpers used across domain and view modules.

pub mod fmt;
pub mod serde_util;

pub use fmt::money::{format_currency, format_signed_percent};
pub use fmt::num::display;
