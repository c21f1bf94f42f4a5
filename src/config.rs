//! Environment-driven configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `ORACLE_API_URL` | [`DEFAULT_API_URL`] |
//! | `ORACLE_REFRESH_MS` | [`DEFAULT_REFRESH_INTERVAL_MS`] |
//! | `ORACLE_REQUEST_TIMEOUT_SECS` | [`DEFAULT_REQUEST_TIMEOUT_SECS`] |

use std::time::Duration;

use crate::error::DashboardError;
use crate::network::{DEFAULT_API_URL, DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS};

pub const ENV_API_URL: &str = "ORACLE_API_URL";
pub const ENV_REFRESH_MS: &str = "ORACLE_REFRESH_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ORACLE_REQUEST_TIMEOUT_SECS";

/// Process-level settings for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if url.is_empty() {
                return Err(DashboardError::Config(format!("{} is empty", ENV_API_URL)));
            }
            config.api_url = url.to_string();
        }
        if let Some(ms) = lookup(ENV_REFRESH_MS) {
            let ms = parse_positive(ENV_REFRESH_MS, &ms)?;
            config.refresh_interval = Duration::from_millis(ms);
        }
        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs = parse_positive(ENV_REQUEST_TIMEOUT_SECS, &secs)?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u64, DashboardError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(DashboardError::Config(format!("{} must be greater than zero", key))),
        Ok(n) => Ok(n),
        Err(e) => Err(DashboardError::Config(format!(
            "{} must be a whole number, got {:?}: {}",
            key, raw, e
        ))),
    }
}
