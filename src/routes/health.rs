use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use crate::db;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    timestamp: i64,
}

// GET /health - Liveness plus a round-trip to the storage handle
pub async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match db::ping(&pool).await {
        Ok(()) => (StatusCode::OK, "up"),
        Err(e) => {
            tracing::warn!("Health check could not reach database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    let response = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" },
        database,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
