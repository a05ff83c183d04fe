use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{MessageResponse, NewPlayer, Player};

pub const SAVED_MESSAGE: &str = "Player data saved successfully";

// GET /api/players - List every stored player in insertion order
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::get_all_players(&pool).await?;
    Ok(Json(players))
}

// POST /api/players - Append a player record
//
// The body is taken as a Result so parse failures reach the client through
// ApiError instead of axum's default 4xx rejection.
pub async fn create_player(
    State(pool): State<SqlitePool>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = body?;
    let new_player = parse_new_player(body)?;
    let nickname = new_player.nickname.ok_or(ApiError::MissingNickname)?;

    let id = db::insert_player(
        &pool,
        &nickname,
        new_player.total_games,
        new_player.successful_games,
    )
    .await?;

    tracing::info!(id, nickname = %nickname, "player saved");

    Ok(Json(MessageResponse::new(SAVED_MESSAGE)))
}

// Only a JSON object is a player body. A derived Deserialize would also fill
// NewPlayer positionally from an array.
fn parse_new_player(body: Value) -> Result<NewPlayer, ApiError> {
    if !body.is_object() {
        return Err(ApiError::InvalidBody(
            "request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
