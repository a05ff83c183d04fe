use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::models::Player;

/// Open a pool for `database_url`, creating the database file if it does not exist
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .connect_with(options)
        .await
}

/// Single-connection in-memory pool. Every connection to `sqlite::memory:` is a
/// separate database, so the pool must never open a second one.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS players (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               nickname TEXT NOT NULL,
               total_games INTEGER,
               successful_games INTEGER
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, nickname, total_games, successful_games FROM players ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn count_players(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM players"#)
        .fetch_one(pool)
        .await
}

/// Append a player row and return the id storage assigned to it
pub async fn insert_player(
    pool: &SqlitePool,
    nickname: &str,
    total_games: Option<i64>,
    successful_games: Option<i64>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO players (nickname, total_games, successful_games) VALUES (?, ?, ?)"#
    )
    .bind(nickname)
    .bind(total_games)
    .bind(successful_games)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let pool = setup().await;
        assert!(get_all_players(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = setup().await;
        insert_player(&pool, "Ada", Some(1), Some(1)).await.unwrap();

        init_schema(&pool).await.unwrap();

        assert_eq!(get_all_players(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let pool = setup().await;

        let first = insert_player(&pool, "Ada", Some(10), Some(7)).await.unwrap();
        let second = insert_player(&pool, "Ada", None, None).await.unwrap();
        let third = insert_player(&pool, "Linus", Some(2), None).await.unwrap();

        assert_eq!(first, 1);
        assert!(first < second && second < third);

        let players = get_all_players(&pool).await.unwrap();
        let ids: Vec<i64> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first, second, third]);
        assert_eq!(players[1].nickname, "Ada");
        assert_eq!(players[1].total_games, None);
        assert_eq!(players[2].successful_games, None);
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let pool = setup().await;
        assert_eq!(count_players(&pool).await.unwrap(), 0);

        insert_player(&pool, "Ada", None, None).await.unwrap();
        insert_player(&pool, "Grace", Some(3), Some(1)).await.unwrap();

        assert_eq!(count_players(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn list_fails_without_schema() {
        let pool = connect_in_memory().await.unwrap();
        assert!(get_all_players(&pool).await.is_err());
    }

    #[tokio::test]
    async fn connect_creates_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "player_stats_api_{}_{}.db",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let url = format!("sqlite:{}", path.display());

        let pool = connect(&url).await.unwrap();
        init_schema(&pool).await.unwrap();
        insert_player(&pool, "Ada", None, None).await.unwrap();
        pool.close().await;

        let existed = path.exists();
        let pool = connect(&url).await.unwrap();
        let listed = get_all_players(&pool).await.map(|players| players.len());
        pool.close().await;

        for suffix in ["", "-wal", "-shm", "-journal"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }

        assert!(existed);
        assert_eq!(listed.unwrap(), 1);
    }
}
