//! Low-level HTTP client: `DashboardHttp`.
//!
//! One method per backend endpoint. Returns wire types (conversion to domain
//! types happens in the sub-clients). All requests are unauthenticated GETs
//! with no query string and no body, and none are retried.

use crate::domain::history::wire::HistoricalResponse;
use crate::domain::indicators::wire::IndicatorsResponse;
use crate::domain::opportunity::wire::OpportunityResponse;
use crate::domain::prices::wire::PricesResponse;
use crate::error::{DashboardError, HttpError};
use crate::network::paths;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the dashboard backend.
#[derive(Clone)]
pub struct DashboardHttp {
    base_url: String,
    client: Client,
}

impl DashboardHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DashboardError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Endpoints ────────────────────────────────────────────────────────

    pub async fn get_prices(&self) -> Result<PricesResponse, HttpError> {
        self.get(&self.url(paths::PRICES)).await
    }

    pub async fn get_historical(&self) -> Result<HistoricalResponse, HttpError> {
        self.get(&self.url(paths::HISTORICAL)).await
    }

    pub async fn get_indicators(&self) -> Result<IndicatorsResponse, HttpError> {
        self.get(&self.url(paths::INDICATORS)).await
    }

    pub async fn get_opportunity(&self) -> Result<OpportunityResponse, HttpError> {
        self.get(&self.url(paths::OPPORTUNITY)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::trace!("GET {}", url);

        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            // Read the body first so a bad shape surfaces as `Decode`,
            // separate from transport errors.
            let body = resp.bytes().await?;
            return serde_json::from_slice::<T>(&body).map_err(|source| HttpError::Decode {
                body: String::from_utf8_lossy(&body).into_owned(),
                source,
            });
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
