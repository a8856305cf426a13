use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::api::{events, fighters, fights, health, stats};
use crate::config::JSON_BODY_LIMIT_BYTES;
use crate::db::Store;
use crate::error::{AppError, ErrorBody, INTERNAL_ERROR_MESSAGE};

#[derive(Clone)]
pub struct ApiState {
    pub store: Store,
}

/// Route table advertised by `GET /`.
pub const ENDPOINTS: &[&str] = &[
    "GET /api/health",
    "GET /api/fighters?search=&stance=&limit=100&offset=0",
    "GET /api/fighters/search?q=&limit=20&offset=0",
    "GET /api/fighters/name/:name",
    "GET /api/fighters/:id",
    "GET /api/fighters/:id/profile",
    "GET /api/fighters/:id/stats",
    "GET /api/fighters/:id/fights",
    "GET /api/fighters/:id/record",
    "GET /api/events",
    "GET /api/events/:id",
    "GET /api/events/:id/fights",
    "GET /api/fights?limit=50&offset=0",
    "GET /api/fights/recent?limit=10",
    "GET /api/fights/matchup/:fighter1/:fighter2",
    "GET /api/fights/:id",
    "GET /api/stats/top-strikers?limit=10",
    "GET /api/stats/top-grapplers?limit=10",
    "GET /api/stats/top-records?limit=10",
    "GET /api/stats/most-active?limit=10",
    "GET /api/stats/stances",
    "GET /api/stats/summary",
];

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get_only(health::index))
        .route("/api/health", get_only(health::health))
        // Fighters
        .route("/api/fighters", get_only(fighters::list_fighters))
        .route("/api/fighters/search", get_only(fighters::search_fighters))
        .route("/api/fighters/name/:name", get_only(fighters::get_fighter_by_name))
        .route("/api/fighters/:id", get_only(fighters::get_fighter))
        .route("/api/fighters/:id/profile", get_only(fighters::get_fighter_profile))
        .route("/api/fighters/:id/stats", get_only(fighters::get_fighter_stats))
        .route("/api/fighters/:id/fights", get_only(fighters::get_fighter_history))
        .route("/api/fighters/:id/record", get_only(fighters::get_fighter_record))
        // Events
        .route("/api/events", get_only(events::list_events))
        .route("/api/events/:id", get_only(events::get_event))
        .route("/api/events/:id/fights", get_only(events::get_event_fights))
        // Fights
        .route("/api/fights", get_only(fights::list_fights))
        .route("/api/fights/recent", get_only(fights::recent_fights))
        .route("/api/fights/matchup/:fighter1/:fighter2", get_only(fights::matchup))
        .route("/api/fights/:id", get_only(fights::get_fight))
        // Statistics
        .route("/api/stats/top-strikers", get_only(stats::top_strikers))
        .route("/api/stats/top-grapplers", get_only(stats::top_grapplers))
        .route("/api/stats/top-records", get_only(stats::top_records))
        .route("/api/stats/most-active", get_only(stats::most_active))
        .route("/api/stats/stances", get_only(stats::stance_distribution))
        .route("/api/stats/summary", get_only(stats::summary))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET route whose other methods fall through to the 404 envelope.
fn get_only<H, T>(handler: H) -> MethodRouter<ApiState>
where
    H: Handler<T, ApiState>,
    T: 'static,
{
    get(handler).fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {detail}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
