use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use crate::config::Config;
use crate::models::*;

/// Open the storage handle shared by every handler.
///
/// The schema is owned by whoever seeds the database; the file must already
/// exist. Connections are never recycled so the handle lives until `close`.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database at {}", config.database_url);

    Ok(pool)
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<PlayerRow>, sqlx::Error> {
    sqlx::query_as::<_, PlayerRow>(
        r#"SELECT * FROM player_details"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &SqlitePool, player_id: i64) -> Result<Option<PlayerRow>, sqlx::Error> {
    sqlx::query_as::<_, PlayerRow>(
        r#"SELECT * FROM player_details WHERE player_id = ?"#
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

/// Returns the number of rows touched; zero when the id does not exist.
pub async fn update_player_name(pool: &SqlitePool, player_id: i64, player_name: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE player_details
           SET player_name = ?
           WHERE player_id = ?"#
    )
    .bind(player_name)
    .bind(player_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

// Match queries
pub async fn get_match_by_id(pool: &SqlitePool, match_id: i64) -> Result<Option<MatchRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchRow>(
        r#"SELECT * FROM match_details WHERE match_id = ?"#
    )
    .bind(match_id)
    .fetch_optional(pool)
    .await
}

// Join queries - one result per score row, duplicates included
pub async fn get_player_matches(pool: &SqlitePool, player_id: i64) -> Result<Vec<MatchRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchRow>(
        r#"SELECT match_details.match_id, match_details.match, match_details.year
           FROM match_details
           INNER JOIN player_match_score
               ON match_details.match_id = player_match_score.match_id
           WHERE player_match_score.player_id = ?"#
    )
    .bind(player_id)
    .fetch_all(pool)
    .await
}

pub async fn get_match_players(pool: &SqlitePool, match_id: i64) -> Result<Vec<PlayerRow>, sqlx::Error> {
    sqlx::query_as::<_, PlayerRow>(
        r#"SELECT player_details.player_id, player_details.player_name
           FROM player_details
           INNER JOIN player_match_score
               ON player_details.player_id = player_match_score.player_id
           WHERE player_match_score.match_id = ?"#
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

/// Career totals for one player, recomputed on every call
pub async fn get_player_stats(pool: &SqlitePool, player_id: i64) -> Result<PlayerStatsRow, sqlx::Error> {
    sqlx::query_as::<_, PlayerStatsRow>(
        r#"SELECT
               player_details.player_id,
               player_details.player_name,
               SUM(player_match_score.score) AS total_score,
               SUM(player_match_score.fours) AS total_fours,
               SUM(player_match_score.sixes) AS total_sixes
           FROM player_match_score
           INNER JOIN player_details
               ON player_match_score.player_id = player_details.player_id
           WHERE player_details.player_id = ?"#
    )
    .bind(player_id)
    .fetch_one(pool)
    .await
}
