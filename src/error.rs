//! Unified error types and the fail-open fetch outcome.

use thiserror::Error;

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DashboardError {
    /// Collapse this error into the failure taxonomy shown to the view layer.
    pub fn failure(&self) -> FetchFailure {
        let kind = match self {
            DashboardError::Http(e) => e.kind(),
            DashboardError::Serde(_) => FailureKind::Malformed,
            DashboardError::Config(_) | DashboardError::Other(_) => FailureKind::Transport,
        };
        FetchFailure {
            kind,
            message: self.to_string(),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response body: {source}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } | HttpError::BadRequest { status, .. } => {
                Some(*status)
            }
            HttpError::RateLimited => Some(429),
            HttpError::Unauthorized => Some(401),
            HttpError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        if let Some(status) = self.status() {
            return FailureKind::Status(status);
        }
        match self {
            HttpError::Decode { .. } => FailureKind::Malformed,
            #[cfg(feature = "http")]
            HttpError::Transport(e) if e.is_decode() => FailureKind::Malformed,
            _ => FailureKind::Transport,
        }
    }
}

// ─── Fetch outcomes ──────────────────────────────────────────────────────────

/// Why a fetch fell back to its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Network or transport failure (including timeouts).
    Transport,
    /// The backend answered with a non-success status.
    Status(u16),
    /// The body was not the expected JSON shape.
    Malformed,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Status(status) => write!(f, "status {}", status),
            FailureKind::Malformed => write!(f, "malformed"),
        }
    }
}

/// A tagged failure reason carried alongside a fallback value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Result of a fail-open fetch: always carries a renderable value.
///
/// `Fallback` holds the documented zero/empty default together with the
/// failure that produced it, so "backend reports zero" and "backend
/// unreachable" stay distinguishable even though both render the same.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback { value: T, failure: FetchFailure },
}

impl<T: Default> Fetched<T> {
    /// Absorb an error into the default value, logging it first.
    pub fn or_default(endpoint: &str, result: Result<T, DashboardError>) -> Self {
        match result {
            Ok(value) => Fetched::Live(value),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "Fetch failed, using default");
                Fetched::Fallback {
                    value: T::default(),
                    failure: e.failure(),
                }
            }
        }
    }
}

impl<T> Fetched<T> {
    pub fn value(&self) -> &T {
        match self {
            Fetched::Live(value) | Fetched::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Live(value) | Fetched::Fallback { value, .. } => value,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback { failure, .. } => Some(failure),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    /// Split into the value and the optional failure tag.
    pub fn into_parts(self) -> (T, Option<FetchFailure>) {
        match self {
            Fetched::Live(value) => (value, None),
            Fetched::Fallback { value, failure } => (value, Some(failure)),
        }
    }
}
