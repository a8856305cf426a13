use axum::extract::State;

use crate::api::envelope::Envelope;
use crate::api::params::{path_id, ApiPath};
use crate::api::routes::ApiState;
use crate::db::models::{Bout, Event};
use crate::error::{AppError, Result};

/// GET /api/events
pub async fn list_events(State(state): State<ApiState>) -> Result<Envelope<Vec<Event>>> {
    Ok(Envelope::list(state.store.events().await?))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<Event>> {
    let id = path_id(id.as_deref()).ok_or(AppError::NotFound("Event"))?;
    Ok(Envelope::one(state.store.event(id).await?))
}

/// GET /api/events/:id/fights
pub async fn get_event_fights(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<Vec<Bout>>> {
    let bouts = match path_id(id.as_deref()) {
        Some(id) => state.store.event_fights(id).await?,
        None => Vec::new(),
    };
    Ok(Envelope::list(bouts))
}
