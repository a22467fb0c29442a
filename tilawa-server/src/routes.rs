//! Routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

fn cors_layer() -> CorsLayer {
    // TILAWA_CORS_ORIGINS can be a comma-separated list of origins, or "*" for any
    let origins = match std::env::var("TILAWA_CORS_ORIGINS").ok() {
        Some(origins) if origins.trim() == "*" => {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }
        Some(origins) => origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect::<Vec<_>>(),
        None => DEV_ORIGINS.iter().filter_map(|s| s.parse().ok()).collect(),
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/chapters", get(handlers::list_chapters))
        .route("/chapters/{id}", get(handlers::get_chapter))
        .route("/chapters/{id}/verses", get(handlers::get_verses))
        .route("/bookmarks", get(handlers::list_bookmarks))
        .route("/bookmarks/export", get(handlers::export_bookmarks))
        .route("/bookmarks/{key}", post(handlers::toggle_bookmark))
        .route("/theme", get(handlers::get_theme).put(handlers::put_theme))
        .route("/session", get(handlers::get_session))
        .route("/diagnostics", get(handlers::run_diagnostics));

    let page_routes = Router::new()
        .route("/", get(handlers::home))
        .route("/surahs", get(handlers::list_chapters_page))
        .route("/surah/{id}", get(handlers::chapter_page))
        .route("/surah/{id}/bookmark", post(handlers::toggle_chapter_bookmark))
        .route("/surah/{id}/play", post(handlers::toggle_playback))
        .route("/verse/{key}/bookmark", post(handlers::toggle_verse_bookmark))
        .route("/bookmarks", get(handlers::bookmarks_page))
        .route("/theme", post(handlers::set_theme));

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
