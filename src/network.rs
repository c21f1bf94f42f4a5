//! Default endpoint and timing constants.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Period of the dashboard refresh timer.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 2000;

/// Per-request timeout applied by the native HTTP client.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Backend endpoint paths, relative to the base URL.
pub mod paths {
    pub const PRICES: &str = "/prices";
    pub const HISTORICAL: &str = "/historical";
    pub const INDICATORS: &str = "/indicators";
    pub const OPPORTUNITY: &str = "/opportunity";
}
