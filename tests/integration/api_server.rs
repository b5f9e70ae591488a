//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and signal evaluation wiring.


use serde_json::Value;

use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "sygnal-signal-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn presets_endpoint_lists_full_catalog() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/presets").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let presets = body.as_array().expect("array of presets");
    assert_eq!(presets.len(), 28);

    let bitcoin = presets
        .iter()
        .find(|p| p["name"] == "Bitcoin")
        .expect("Bitcoin preset");
    assert_eq!(bitcoin["symbol"], "BTC-USD");
    assert_eq!(bitcoin["strategy"], "trend_breakout");
}

#[tokio::test]
async fn signal_endpoint_evaluates_preset() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/signals/Gold").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["preset"], "Gold");
    assert_eq!(body["report"]["symbol"], "GC=F");
    assert_eq!(body["report"]["strategy"], "mean_reversion");
    assert!(body["report"]["decision"]["action"].is_string());
    assert!(body["report"]["cash_risk"].as_f64().is_some());
    // Indicator columns are opt-in.
    assert!(body.get("indicators").is_none());
}

#[tokio::test]
async fn signal_endpoint_returns_indicator_columns_on_request() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/signals/Gold")
        .add_query_param("indicators", "true")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let close = body["indicators"]["close"].as_array().expect("close column");
    assert_eq!(close.len(), 150);
    let rsi = body["indicators"]["rsi"].as_array().expect("rsi column");
    assert_eq!(rsi.len(), 150);
    // The RSI window is not yet populated at the first bar.
    assert!(rsi[0].is_null());
    assert!(rsi[149].is_f64());
}

#[tokio::test]
async fn signal_endpoint_accepts_risk_overrides() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/signals/Gold")
        .add_query_param("equity", "50000")
        .add_query_param("risk_pct", "2")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["report"]["cash_risk"].as_f64().unwrap(), 1000.0);
}

#[tokio::test]
async fn unknown_preset_is_not_found() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/signals/Copper").await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Copper"));
}

#[tokio::test]
async fn provider_outage_maps_to_bad_gateway() {
    let app = TestApiServer::with_failing_provider().await;
    let response = app.server.get("/api/signals/Gold").await;
    assert_eq!(response.status_code(), 502);

    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn short_history_maps_to_unprocessable() {
    let app = TestApiServer::with_short_history().await;
    let response = app.server.get("/api/signals/Gold").await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("insufficient"));
}

#[tokio::test]
async fn invalid_risk_fraction_is_bad_request() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .get("/api/signals/Gold")
        .add_query_param("risk_pct", "0")
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn successful_evaluation_is_counted() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/signals/Gold").await;
    assert_eq!(response.status_code(), 200);

    let metrics = app.server.get("/metrics").await.text();
    assert!(
        metrics.contains("signal_evaluations_total"),
        "Expected signal_evaluations_total metric after an evaluation"
    );
    assert!(metrics.contains("mean_reversion"));
}

#[tokio::test]
async fn api_server_is_stateless() {
    let app = TestApiServer::new().await;

    let response1 = app.server.get("/api/signals/Bitcoin").await;
    let response2 = app.server.get("/api/signals/Bitcoin").await;

    assert_eq!(response1.status_code(), 200);
    assert_eq!(response2.status_code(), 200);

    let body1: Value = response1.json();
    let body2: Value = response2.json();
    assert_eq!(body1["report"], body2["report"]);
}
