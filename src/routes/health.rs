use axum::{extract::State, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    players: i64,
    timestamp: i64,
}

// GET /health - Reports whether the players table is reachable and how many rows it holds
pub async fn health_check(
    State(pool): State<SqlitePool>,
) -> Result<Json<HealthResponse>, ApiError> {
    let players = db::count_players(&pool).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        players,
        timestamp: chrono::Utc::now().timestamp(),
    }))
}
