use std::sync::Arc;

use kids_games_backend::api;
use kids_games_backend::config::Config;
use kids_games_backend::db::Database;
use kids_games_backend::metrics;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load();
    metrics::register_metrics();

    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to initialize database");
    let db = Arc::new(db);

    let app = api::app(db, &config.games_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Kids games server running at http://{addr}/");
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
