//! Data access against a mock backend.
//!
//! Every endpoint is exercised on the happy path and on each failure class:
//! transport, non-success status and malformed body. Failures must resolve to
//! the zero/empty default tagged with the right `FailureKind`.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oracle_dashboard::prelude::*;

async fn client_for(server: &MockServer) -> DashboardClient {
    DashboardClient::builder()
        .base_url(&format!("{}/api", server.uri()))
        .request_timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
        .mount(server)
        .await;
}

// ─── Success ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn prices_derive_spread() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/prices",
        json!({ "centralized": { "price": 65000.0 }, "dex": { "price": 64800.0 } }),
    )
    .await;

    let fetched = client_for(&server).await.prices().fetch().await;
    assert!(fetched.is_live());

    let snapshot = fetched.into_value();
    assert_eq!(snapshot.centralized_price, 65000.0);
    assert_eq!(snapshot.decentralized_price, 64800.0);
    assert_eq!(snapshot.absolute_difference, 200.0);
    assert!((snapshot.percent_difference - 0.308_641_975).abs() < 1e-6);
}

#[tokio::test]
async fn historical_maps_binance_to_centralized() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/historical",
        json!({
            "binance": [{ "timestamp": 1000, "price": 100.0 }, { "timestamp": 2000, "price": 101.0 }],
            "dex": [{ "timestamp": 1500, "price": 99.5 }]
        }),
    )
    .await;

    let series = client_for(&server).await.history().fetch().await.into_value();
    assert_eq!(series.centralized.len(), 2);
    assert_eq!(series.centralized[1].timestamp, 2000);
    assert_eq!(series.decentralized.len(), 1);
    assert_eq!(series.decentralized[0].price, 99.5);
}

#[tokio::test]
async fn indicators_pass_through() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/indicators", json!({ "rsi": 25.0, "ema": 64900.0 })).await;

    let set = client_for(&server).await.indicators().fetch().await;
    assert!(set.is_live());
    assert_eq!(set.value().rsi, 25.0);
    assert_eq!(set.value().ema, 64900.0);
}

#[tokio::test]
async fn opportunity_buy_wins_over_sell() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/opportunity",
        json!({ "buyOpportunity": true, "sellOpportunity": true, "priceDifference": 1.5 }),
    )
    .await;

    let signal = client_for(&server).await.opportunity().fetch().await.into_value();
    assert_eq!(signal.kind, OpportunityKind::Buy);
    assert_eq!(signal.strength, 100.0);
}

#[tokio::test]
async fn opportunity_strength_scales_difference() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/opportunity",
        json!({ "buyOpportunity": false, "sellOpportunity": true, "priceDifference": -0.3 }),
    )
    .await;

    let signal = client_for(&server).await.opportunity().fetch().await.into_value();
    assert_eq!(signal.kind, OpportunityKind::Sell);
    assert!((signal.strength - 30.0).abs() < 1e-9);
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn server_error_falls_back_to_zeroed_prices() {
    let server = MockServer::start().await;
    mount_status(&server, "/api/prices", 500).await;

    let fetched = client_for(&server).await.prices().fetch().await;
    assert!(!fetched.is_live());
    assert_eq!(fetched.failure().map(|f| f.kind), Some(FailureKind::Status(500)));
    assert_eq!(*fetched.value(), PriceSnapshot::default());
}

#[tokio::test]
async fn not_found_falls_back_to_empty_history() {
    let server = MockServer::start().await;
    mount_status(&server, "/api/historical", 404).await;

    let fetched = client_for(&server).await.history().fetch().await;
    assert_eq!(fetched.failure().map(|f| f.kind), Some(FailureKind::Status(404)));
    assert!(fetched.value().is_empty());
}

#[tokio::test]
async fn malformed_body_falls_back_to_neutral() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/opportunity"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let fetched = client_for(&server).await.opportunity().fetch().await;
    assert_eq!(fetched.failure().map(|f| f.kind), Some(FailureKind::Malformed));
    assert_eq!(fetched.value().kind, OpportunityKind::Neutral);
    assert_eq!(fetched.value().strength, 0.0);
}

#[tokio::test]
async fn missing_field_is_malformed() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/indicators", json!({ "rsi": 50.0 })).await;

    let fetched = client_for(&server).await.indicators().fetch().await;
    assert_eq!(fetched.failure().map(|f| f.kind), Some(FailureKind::Malformed));
    assert_eq!(*fetched.value(), IndicatorSet::default());
}

#[tokio::test]
async fn unreachable_backend_is_transport_failure_for_every_endpoint() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = DashboardClient::builder()
        .base_url("http://127.0.0.1:9/api")
        .request_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let prices = client.prices().fetch().await;
    assert_eq!(prices.failure().map(|f| f.kind), Some(FailureKind::Transport));
    assert_eq!(*prices.value(), PriceSnapshot::default());

    let history = client.history().fetch().await;
    assert_eq!(history.failure().map(|f| f.kind), Some(FailureKind::Transport));
    assert!(history.value().centralized.is_empty());
    assert!(history.value().decentralized.is_empty());

    let indicators = client.indicators().fetch().await;
    assert_eq!(indicators.failure().map(|f| f.kind), Some(FailureKind::Transport));
    assert_eq!(*indicators.value(), IndicatorSet::default());

    let opportunity = client.opportunity().fetch().await;
    assert_eq!(opportunity.failure().map(|f| f.kind), Some(FailureKind::Transport));
    assert_eq!(opportunity.value().kind, OpportunityKind::Neutral);
    assert_eq!(opportunity.value().strength, 0.0);
}

#[tokio::test]
async fn malformed_body_is_kept_for_diagnostics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/prices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.prices().try_get().await.unwrap_err();
    match err {
        DashboardError::Http(HttpError::Decode { body, .. }) => {
            assert_eq!(body, "<html>oops</html>");
        }
        other => panic!("expected a decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn try_get_surfaces_the_error() {
    let server = MockServer::start().await;
    mount_status(&server, "/api/indicators", 503).await;

    let err = client_for(&server).await.indicators().try_get().await.unwrap_err();
    assert_eq!(err.failure().kind, FailureKind::Status(503));
}

// ─── Full cycle ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn one_failing_endpoint_leaves_the_others_live() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/prices",
        json!({ "centralized": { "price": 65000.0 }, "dex": { "price": 64800.0 } }),
    )
    .await;
    mount_json(&server, "/api/historical", json!({ "binance": [], "dex": [] })).await;
    mount_status(&server, "/api/indicators", 500).await;
    mount_json(
        &server,
        "/api/opportunity",
        json!({ "buyOpportunity": false, "sellOpportunity": false, "priceDifference": 0.0 }),
    )
    .await;

    let sync = DashboardSync::new(client_for(&server).await, SyncConfig::default());
    let report = sync.refresh(RefreshTrigger::Mount).await;
    assert_eq!(report, RefreshReport::Committed { cycle: 1, failures: 1 });

    let state = sync.state().await;
    assert_eq!(state.prices.absolute_difference, 200.0);
    assert!(state.failures.indicators.is_some());
    assert!(state.failures.prices.is_none());
    assert!(state.history.is_empty());

    let view = sync.view().await;
    assert!(view.chart.is_empty());
    assert_eq!(view.price_cards[0].value, "$65,000.00");
}
