// Prometheus metrics definitions for the kids games backend.

use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use lazy_static::lazy_static;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // ── Counters ─────────────────────────────────────────────────────

    /// Total HTTP requests, by method/endpoint/status.
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("kids_games_http_requests_total", "Total HTTP requests"),
        &["method", "endpoint", "status"],
    )
    .unwrap();

    /// Total game clicks recorded in the store.
    pub static ref CLICKS_RECORDED_TOTAL: IntCounter = IntCounter::new(
        "kids_games_clicks_recorded_total",
        "Game clicks recorded",
    )
    .unwrap();

    /// Total click requests rejected for an invalid game identifier.
    pub static ref INVALID_GAME_IDS_TOTAL: IntCounter = IntCounter::new(
        "kids_games_invalid_game_ids_total",
        "Click requests rejected for an invalid game identifier",
    )
    .unwrap();

    // ── Histograms ───────────────────────────────────────────────────

    /// HTTP request duration in seconds, by endpoint.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "kids_games_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 5.0]),
        &["endpoint"],
    )
    .unwrap();
}

/// Register all metrics with the custom registry. Call once at startup.
pub fn register_metrics() {
    let collectors: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(HTTP_REQUESTS_TOTAL.clone()),
        Box::new(CLICKS_RECORDED_TOTAL.clone()),
        Box::new(INVALID_GAME_IDS_TOTAL.clone()),
        Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()),
    ];

    for c in collectors {
        REGISTRY.register(c).expect("failed to register metric");
    }
}

/// Serialize all registered metrics to the Prometheus text exposition format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Normalize a URL path for metric labels: collapse arbitrary game-page
/// paths into one label to prevent cardinality explosion.
pub fn endpoint_label(path: &str) -> &str {
    match path {
        "/api/click" | "/api/stats" | "/health" | "/metrics" => path,
        _ => "/static",
    }
}

/// Middleware recording a counter and a duration sample for every response.
pub async fn track_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let endpoint = endpoint_label(req.uri().path()).to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &endpoint, &status])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&endpoint])
        .observe(start.elapsed().as_secs_f64());

    response
}
