use axum::extract::State;

use crate::api::envelope::Envelope;
use crate::api::params::{ApiQuery, LimitQuery};
use crate::api::routes::ApiState;
use crate::config::page_defaults;
use crate::db::models::{ActivityRank, DatabaseSummary, RankedFighter, RecordRank, StanceCount};
use crate::error::Result;

/// GET /api/stats/top-strikers?limit
pub async fn top_strikers(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<LimitQuery>,
) -> Result<Envelope<Vec<RankedFighter>>> {
    let limit = params.limit_or(page_defaults::LEADERBOARD);
    Ok(Envelope::list(state.store.top_strikers(limit).await?))
}

/// GET /api/stats/top-grapplers?limit
pub async fn top_grapplers(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<LimitQuery>,
) -> Result<Envelope<Vec<RankedFighter>>> {
    let limit = params.limit_or(page_defaults::LEADERBOARD);
    Ok(Envelope::list(state.store.top_grapplers(limit).await?))
}

/// GET /api/stats/top-records?limit
pub async fn top_records(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<LimitQuery>,
) -> Result<Envelope<Vec<RecordRank>>> {
    let limit = params.limit_or(page_defaults::LEADERBOARD);
    Ok(Envelope::list(state.store.top_records(limit).await?))
}

/// GET /api/stats/most-active?limit
pub async fn most_active(
    State(state): State<ApiState>,
    ApiQuery(params): ApiQuery<LimitQuery>,
) -> Result<Envelope<Vec<ActivityRank>>> {
    let limit = params.limit_or(page_defaults::LEADERBOARD);
    Ok(Envelope::list(state.store.most_active(limit).await?))
}

/// GET /api/stats/stances
pub async fn stance_distribution(
    State(state): State<ApiState>,
) -> Result<Envelope<Vec<StanceCount>>> {
    Ok(Envelope::list(state.store.stance_distribution().await?))
}

/// GET /api/stats/summary
pub async fn summary(State(state): State<ApiState>) -> Result<Envelope<DatabaseSummary>> {
    Ok(Envelope::one(state.store.summary().await?))
}
