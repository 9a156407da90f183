// Static serving of the game pages.

use std::path::Path;

use axum::handler::HandlerWithoutStateExt;
use axum::Router;
use tower_http::services::ServeDir;

use crate::error::ApiError;

async fn handle_missing_file() -> ApiError {
    ApiError::NotFound
}

/// Fallback router serving game pages from `games_dir`.
///
/// `/` serves `index.html`. Paths with `..` components are refused before
/// touching the filesystem, so nothing outside `games_dir` is ever served.
pub fn router(games_dir: &Path) -> Router {
    let serve_games = ServeDir::new(games_dir)
        .append_index_html_on_directories(true)
        .not_found_service(handle_missing_file.into_service());
    Router::new().fallback_service(serve_games)
}
