use serde::{Deserialize, Serialize};

/// Row from the players table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub nickname: String,
    pub total_games: Option<i64>,
    pub successful_games: Option<i64>,
}

/// Body of POST /api/players.
///
/// Every key may be absent. The game client sends camelCase counters and its own
/// `id`, so the counters accept both spellings and unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NewPlayer {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default, alias = "totalGames")]
    pub total_games: Option<i64>,
    #[serde(default, alias = "successfulGames")]
    pub successful_games: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
