use axum::{
    routing::{get, MethodRouter},
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod health;
pub mod matches;
pub mod players;

/// Build the full application with middleware and the storage handle attached.
pub fn router(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = [
        // Root and health
        ("/", get(|| async { "Cricket Match API - v1.0" })),
        ("/health", get(health::health_check)),

        // Player endpoints
        ("/players", get(players::get_players)),
        ("/players/{player_id}", get(players::get_player_by_id).put(players::update_player)),
        ("/players/{player_id}/matches", get(players::get_player_matches)),
        ("/players/{player_id}/playerScores", get(players::get_player_scores)),

        // Match endpoints
        ("/matches/{match_id}", get(matches::get_match_by_id)),
        ("/matches/{match_id}/players", get(matches::get_match_players)),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            route_with_trailing_slash(router, path, handler)
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

// Paths answer with or without a trailing slash.
fn route_with_trailing_slash(
    router: Router<SqlitePool>,
    path: &str,
    handler: MethodRouter<SqlitePool>,
) -> Router<SqlitePool> {
    if path == "/" {
        return router.route(path, handler);
    }

    router
        .route(path, handler.clone())
        .route(&format!("{}/", path), handler)
}
