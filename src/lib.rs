//! Persistence backend for the game's player records.
//!
//! Stores players in a single SQLite table and serves them as JSON on
//! `/api/players`.

use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub const BANNER: &str = "Player Stats API - v1.0";

/// Build the HTTP application over `pool`
pub fn app(pool: SqlitePool) -> Router {
    // The game page is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { BANNER }))
        .route("/health", get(routes::health::health_check))

        // Player endpoints
        .route(
            "/api/players",
            get(routes::players::get_players).post(routes::players::create_player),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
