//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::SignalError;
use crate::metrics::Metrics;
use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceSeries;
use crate::models::signal::RiskContext;
use crate::services::cache::CachedPriceProvider;
use crate::services::market_data::PriceSeriesProvider;
use crate::services::yahoo::YahooChartProvider;
use crate::signals::engine::SignalEngine;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub catalog: Arc<Catalog>,
    pub provider: Arc<dyn PriceSeriesProvider>,
    pub config: Arc<Config>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "sygnal-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct SignalQuery {
    equity: Option<f64>,
    /// Percent of equity risked per trade, e.g. 4.0 for 4%.
    risk_pct: Option<f64>,
    /// When true, the response includes the full indicator columns.
    #[serde(default)]
    indicators: bool,
}

#[derive(Debug, Serialize)]
struct PresetSummary<'a> {
    name: &'a str,
    symbol: &'a str,
    strategy: &'static str,
}

/// List every preset in the catalog.
async fn list_presets(State(state): State<AppState>) -> Json<Value> {
    let summaries: Vec<PresetSummary<'_>> = state
        .catalog
        .presets()
        .iter()
        .map(|p| PresetSummary {
            name: &p.name,
            symbol: p.parameters.symbol(),
            strategy: p.parameters.kind().as_str(),
        })
        .collect();
    Json(json!(summaries))
}

/// Fetch history for a preset's instrument and evaluate its strategy.
async fn evaluate_signal(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SignalQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let preset = state
        .catalog
        .get(&name)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("unknown preset '{name}'")))?;

    let equity = query.equity.unwrap_or(state.config.default_equity);
    let risk_fraction = query
        .risk_pct
        .map(|pct| pct / 100.0)
        .unwrap_or(state.config.default_risk_fraction);
    let risk_ctx = RiskContext::new(equity, risk_fraction)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let symbol = preset.parameters.symbol();
    let series = state
        .provider
        .fetch(
            symbol,
            &state.config.history_range,
            &state.config.history_interval,
        )
        .await
        .map_err(|e| {
            error!(error = %e, symbol, preset = %name, "price history fetch failed");
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        })?;

    let (report, indicator_series) =
        SignalEngine::evaluate_with_indicators(&series, &preset.parameters, &risk_ctx).map_err(
            |e| {
                error!(error = %e, preset = %name, "signal evaluation failed");
                error_response(status_for(&e), e.to_string())
            },
        )?;

    state
        .metrics
        .signal_evaluations_total
        .with_label_values(&[report.strategy.as_str()])
        .inc();

    let mut body = json!({ "preset": name, "report": report });
    if query.indicators {
        body["indicators"] = indicator_columns(&series, &indicator_series);
    }
    Ok(Json(body))
}

fn status_for(error: &SignalError) -> StatusCode {
    match error {
        SignalError::DataUnavailable { .. } => StatusCode::BAD_GATEWAY,
        SignalError::InsufficientHistory { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SignalError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

/// Full per-bar columns for charting by the presentation layer.
fn indicator_columns(series: &PriceSeries, indicators: &IndicatorSeries) -> Value {
    json!({
        "dates": series.bars().iter().map(|b| b.date).collect::<Vec<_>>(),
        "close": series.closes(),
        "rsi": indicators.rsi,
        "atr": indicators.atr,
        "ema": indicators.ema,
        "highest_in": indicators.highest_in,
        "lowest_in": indicators.lowest_in,
        "highest_out": indicators.highest_out,
        "lowest_out": indicators.lowest_out,
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/presets", get(list_presets))
        .route("/api/signals/{preset}", get(evaluate_signal))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let catalog = Arc::new(Catalog::builtin()?);
    let provider = Arc::new(
        CachedPriceProvider::new(YahooChartProvider::new(config.provider_base_url.clone()))
            .with_metrics(metrics.clone()),
    );

    info!(presets = catalog.len(), "preset catalog loaded");

    let port = config.port;
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        catalog,
        provider,
        config: Arc::new(config),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
