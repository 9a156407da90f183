// HTTP API routes (click recording, stats, health, metrics).

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::db::{Database, GameClick};
use crate::error::ApiError;
use crate::metrics;
use crate::static_files;

// ── Request types ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecordClickParams {
    pub game: Option<String>,
}

// ── Shared application state ─────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

// ── Router ────────────────────────────────────────────────────────────

pub fn router(db: Arc<Database>) -> Router {
    let state = AppState { db };

    Router::new()
        // The original frontend fires clicks as GET or POST; both count.
        .route("/api/click", get(record_click).post(record_click))
        .route("/api/stats", get(get_stats))
        .with_state(state)
}

/// The complete application: API routes plus health, metrics, permissive
/// CORS, request tracking, and the game pages as static fallback.
pub fn app(db: Arc<Database>, games_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .merge(router(db))
        .fallback_service(static_files::router(games_dir))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(metrics::track_requests))
}

// ── Validation ────────────────────────────────────────────────────────

/// The identifier doubles as a filename elsewhere, so it must stay a bare
/// filename-like token: non-empty after trimming, no `".."`, no `/`.
fn validate_game_id(raw: &str) -> Result<&str, ApiError> {
    let game = raw.trim();
    if game.is_empty() || game.contains("..") || game.contains('/') {
        metrics::INVALID_GAME_IDS_TOTAL.inc();
        return Err(ApiError::InvalidGameId);
    }
    Ok(game)
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "kids-games-backend" }))
}

async fn get_metrics() -> String {
    metrics::gather_metrics()
}

async fn record_click(
    State(state): State<AppState>,
    Query(params): Query<RecordClickParams>,
) -> Result<Json<Value>, ApiError> {
    let game = validate_game_id(params.game.as_deref().unwrap_or(""))?;
    state.db.record_click(game).await?;
    metrics::CLICKS_RECORDED_TOTAL.inc();
    Ok(Json(json!({ "ok": true, "game": game })))
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<Vec<GameClick>>, ApiError> {
    let counters = state.db.all_counters().await?;
    Ok(Json(counters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_game_id_passes() {
        assert_eq!(
            validate_game_id("tako-age-game.html").unwrap(),
            "tako-age-game.html"
        );
    }

    #[test]
    fn test_game_id_is_trimmed() {
        assert_eq!(validate_game_id("  elevator-game.html  ").unwrap(), "elevator-game.html");
    }

    #[test]
    fn test_empty_game_id_rejected() {
        assert!(matches!(validate_game_id(""), Err(ApiError::InvalidGameId)));
        assert!(matches!(validate_game_id("  "), Err(ApiError::InvalidGameId)));
    }

    #[test]
    fn test_traversal_game_id_rejected() {
        assert!(matches!(
            validate_game_id("../secret"),
            Err(ApiError::InvalidGameId)
        ));
    }

    #[test]
    fn test_path_separator_game_id_rejected() {
        assert!(matches!(
            validate_game_id("a/b.html"),
            Err(ApiError::InvalidGameId)
        ));
    }
}
