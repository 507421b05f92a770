use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Match, Player};

// GET /matches/:id/ - Get match by ID
pub async fn get_match_by_id(
    State(pool): State<SqlitePool>,
    Path(match_id): Path<i64>,
) -> Result<Json<Match>, ApiError> {
    let row = db::get_match_by_id(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Match {} not found", match_id)))?;

    Ok(Json(row.to_match()))
}

// GET /matches/:id/players - Players with a score in the match
pub async fn get_match_players(
    State(pool): State<SqlitePool>,
    Path(match_id): Path<i64>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let rows = db::get_match_players(&pool, match_id).await?;

    Ok(Json(rows.iter().map(|r| r.to_player()).collect()))
}
