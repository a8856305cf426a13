use axum::extract::State;

use crate::api::envelope::Envelope;
use crate::api::params::{page, path_id, ApiPath, ApiQuery, LimitQuery, PageQuery};
use crate::api::routes::ApiState;
use crate::config::page_defaults;
use crate::db::models::{Bout, FightDetail};
use crate::error::{AppError, Result};

/// GET /api/fights?limit&offset
pub async fn list_fights(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<PageQuery>,
) -> Result<Envelope<Vec<Bout>>> {
    let page = page(
        params.limit.as_deref(),
        params.offset.as_deref(),
        page_defaults::FIGHTS,
    );
    Ok(Envelope::list(state.store.fights(page).await?))
}

/// GET /api/fights/recent?limit
pub async fn recent_fights(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<LimitQuery>,
) -> Result<Envelope<Vec<Bout>>> {
    let limit = params.limit_or(page_defaults::RECENT_FIGHTS);
    Ok(Envelope::list(state.store.recent_fights(limit).await?))
}

/// GET /api/fights/matchup/:fighter1/:fighter2
pub async fn matchup(
    State(state): State<ApiState>,
    ApiPath(pair): ApiPath<(String, String)>,
) -> Result<Envelope<Vec<Bout>>> {
    let (fighter1, fighter2) = pair.unzip();
    let bouts = match (path_id(fighter1.as_deref()), path_id(fighter2.as_deref())) {
        (Some(a), Some(b)) => state.store.matchup(a, b).await?,
        _ => Vec::new(),
    };
    Ok(Envelope::list(bouts))
}

/// GET /api/fights/:id
pub async fn get_fight(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Envelope<FightDetail>> {
    let id = path_id(id.as_deref()).ok_or(AppError::NotFound("Fight"))?;
    Ok(Envelope::one(state.store.fight(id).await?))
}
