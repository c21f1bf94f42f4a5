//! Terminal dashboard: polls the oracle backend and prints the panels after
//! every committed refresh.
//!
//! Press Enter to refresh immediately, Ctrl+C to quit.

use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use oracle_dashboard::prelude::*;

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = DashboardConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        refresh_ms = config.refresh_interval.as_millis() as u64,
        "Starting oracle dashboard"
    );

    let client = DashboardClient::builder()
        .base_url(&config.api_url)
        .request_timeout(config.request_timeout)
        .build()?;

    let mut poller = Poller::start(client, SyncConfig::from(&config));
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    {
        let mut events = poller.events();
        loop {
            tokio::select! {
                event = events.next() => match event {
                    Some(SyncEvent::Committed { cycle, failures, .. }) => {
                        if failures > 0 {
                            tracing::debug!(cycle, failures, "Rendering with fallback data");
                        }
                        println!("\n{}", poller.sync().view().await);
                    }
                    Some(SyncEvent::Stopped) | None => break,
                    Some(other) => tracing::debug!(?other, "Poller event"),
                },

                line = stdin.next_line(), if stdin_open => match line {
                    Ok(Some(_)) => {
                        if let Err(e) = poller.refresh_now() {
                            tracing::warn!("Manual refresh rejected: {}", e);
                        }
                    }
                    Ok(None) => stdin_open = false,
                    Err(e) => {
                        tracing::warn!("stdin closed: {}", e);
                        stdin_open = false;
                    }
                },

                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutting down");
                    break;
                }
            }
        }
    }

    poller.stop().await;
    Ok(())
}
