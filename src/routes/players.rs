use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Match, Player, PlayerStats, UpdatePlayerRequest};

// GET /players/ - List all players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let rows = db::get_all_players(&pool).await?;

    Ok(Json(rows.iter().map(|r| r.to_player()).collect()))
}

// GET /players/:id/ - Get player by ID
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = db::get_player_by_id(&pool, player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Player {} not found", player_id)))?;

    Ok(Json(player.to_player()))
}

/// PUT /players/:id/ - Rename a player
///
/// There is no existence check; an unknown id still gets the confirmation.
pub async fn update_player(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<i64>,
    Json(body): Json<UpdatePlayerRequest>,
) -> Result<&'static str, ApiError> {
    let updated = db::update_player_name(&pool, player_id, &body.player_name).await?;

    if updated == 0 {
        tracing::debug!("Update matched no player with id {}", player_id);
    }

    Ok("Player Details Updated")
}

// GET /players/:id/matches - Matches the player has a score in
pub async fn get_player_matches(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<i64>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let rows = db::get_player_matches(&pool, player_id).await?;

    Ok(Json(rows.iter().map(|r| r.to_match()).collect()))
}

// GET /players/:id/playerScores - Totals across every score row
pub async fn get_player_scores(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<i64>,
) -> Result<Json<PlayerStats>, ApiError> {
    let stats = db::get_player_stats(&pool, player_id)
        .await?
        .to_player_stats()
        .ok_or_else(|| ApiError::NotFound(format!("No scores recorded for player {}", player_id)))?;

    Ok(Json(stats))
}
