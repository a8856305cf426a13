use axum::extract::State;

use crate::api::envelope::Envelope;
use crate::api::params::{
    page, path_id, ApiPath, ApiQuery, FighterListQuery, FighterSearchQuery,
};
use crate::api::routes::ApiState;
use crate::config::page_defaults;
use crate::db::models::{Fighter, FighterProfile, FighterRecord, FighterStats, HistoryEntry};
use crate::error::{AppError, Result};

const FIGHTER: &str = "Fighter";

/// GET /api/fighters?search&stance&limit&offset
pub async fn list_fighters(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<FighterListQuery>,
) -> Result<Envelope<Vec<Fighter>>> {
    let page = page(
        params.limit.as_deref(),
        params.offset.as_deref(),
        page_defaults::FIGHTERS,
    );
    let fighters = state
        .store
        .list_fighters(params.search.as_deref(), params.stance.as_deref(), page)
        .await?;
    Ok(Envelope::list(fighters))
}

/// GET /api/fighters/search?q&limit&offset
pub async fn search_fighters(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<FighterSearchQuery>,
) -> Result<Envelope<Vec<Fighter>>> {
    let page = page(
        params.limit.as_deref(),
        params.offset.as_deref(),
        page_defaults::FIGHTER_SEARCH,
    );
    let fighters = state
        .store
        .list_fighters(params.q.as_deref(), None, page)
        .await?;
    Ok(Envelope::list(fighters))
}

/// GET /api/fighters/name/:name
pub async fn get_fighter_by_name(
    State(state): State<ApiState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Envelope<Fighter>> {
    let name = name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(AppError::NotFound(FIGHTER))?;
    Ok(Envelope::one(state.store.fighter_by_name(name).await?))
}

/// GET /api/fighters/:id
pub async fn get_fighter(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<Fighter>> {
    let id = path_id(id.as_deref()).ok_or(AppError::NotFound(FIGHTER))?;
    Ok(Envelope::one(state.store.fighter(id).await?))
}

/// GET /api/fighters/:id/profile
pub async fn get_fighter_profile(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<FighterProfile>> {
    let id = path_id(id.as_deref()).ok_or(AppError::NotFound(FIGHTER))?;
    Ok(Envelope::one(state.store.fighter_profile(id).await?))
}

/// GET /api/fighters/:id/stats
pub async fn get_fighter_stats(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<FighterStats>> {
    let id = path_id(id.as_deref()).ok_or(AppError::NotFound("Fighter stats"))?;
    Ok(Envelope::one(state.store.fighter_stats(id).await?))
}

/// GET /api/fighters/:id/fights
pub async fn get_fighter_history(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<Vec<HistoryEntry>>> {
    let history = match path_id(id.as_deref()) {
        Some(id) => state.store.fighter_history(id).await?,
        None => Vec::new(),
    };
    Ok(Envelope::list(history))
}

/// GET /api/fighters/:id/record
pub async fn get_fighter_record(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<FighterRecord>> {
    let id = path_id(id.as_deref()).ok_or(AppError::NotFound(FIGHTER))?;
    Ok(Envelope::one(state.store.fighter_record(id).await?))
}
