use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use tracing::info;

use crate::config::{DB_MAX_CONNECTIONS, SUMMARY_RECENT_EVENTS};
use crate::db::catalog::{
    Catalog, FIGHTER_LIST_BASE, FIGHTER_LIST_ORDER, FIGHTER_SEARCH_COLUMNS, FIGHTER_STANCE_COLUMN,
    PROBE, TABLE_EXISTS,
};
use crate::db::filter::Filter;
use crate::db::models::{
    ActivityRank, Bout, DatabaseSummary, Event, FightDetail, FightTotals, Fighter, FighterProfile,
    FighterRecord, FighterStats, HistoryEntry, Participant, RankedFighter, RecordRank, StanceCount,
};
use crate::db::SchemaProfile;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }
}

/// Read-only handle on the stats database. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
    profile: SchemaProfile,
}

impl Store {
    /// Opens an existing database file. Never creates one.
    pub async fn open(path: &str, read_only: bool) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(read_only)
            .create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(DB_MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        let store = Self::from_pool(pool).await?;
        info!(
            "Opened {path} (read_only={read_only}, schema={})",
            store.profile
        );
        Ok(store)
    }

    /// Wraps an already connected pool and detects its schema profile.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let profile = detect_profile(&pool).await?;
        Ok(Self { pool, profile })
    }

    pub fn profile(&self) -> SchemaProfile {
        self.profile
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn sql(&self) -> &'static Catalog {
        self.profile.catalog()
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query(PROBE).execute(&self.pool).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Fighters
    // -----------------------------------------------------------------------

    pub async fn list_fighters(
        &self,
        search: Option<&str>,
        stance: Option<&str>,
        page: Page,
    ) -> Result<Vec<Fighter>> {
        let filter = Filter::new()
            .contains(FIGHTER_SEARCH_COLUMNS, search)
            .equals(FIGHTER_STANCE_COLUMN, stance);

        let mut qb = QueryBuilder::<Sqlite>::new(FIGHTER_LIST_BASE);
        filter.push_where(&mut qb);
        qb.push(FIGHTER_LIST_ORDER)
            .push(" LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset);

        let fighters = qb.build_query_as::<Fighter>().fetch_all(&self.pool).await?;
        Ok(fighters)
    }

    pub async fn fighter(&self, id: i64) -> Result<Fighter> {
        self.fetch_by_id(self.sql().fighter_by_id, id, "Fighter").await
    }

    /// First fighter (by id) whose name contains `name`.
    pub async fn fighter_by_name(&self, name: &str) -> Result<Fighter> {
        sqlx::query_as::<_, Fighter>(self.sql().fighter_by_name)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("Fighter"))
    }

    pub async fn fighter_profile(&self, id: i64) -> Result<FighterProfile> {
        self.fetch_by_id(self.sql().fighter_profile, id, "Fighter").await
    }

    pub async fn fighter_stats(&self, id: i64) -> Result<FighterStats> {
        self.fetch_by_id(self.sql().fighter_stats, id, "Fighter stats").await
    }

    /// Bouts from the fighter's side, newest first.
    pub async fn fighter_history(&self, id: i64) -> Result<Vec<HistoryEntry>> {
        self.fetch_all_by(self.sql().fighter_history, id).await
    }

    /// Outcome totals. A fighter without bouts gets zero counts.
    pub async fn fighter_record(&self, id: i64) -> Result<FighterRecord> {
        let fighter = self.fighter(id).await?;
        let totals = sqlx::query_as::<_, FightTotals>(self.sql().fighter_totals)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(FighterRecord {
            fighter_id: fighter.fighter_id,
            name: fighter.name,
            totals,
        })
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    pub async fn events(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(self.sql().list_events)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    pub async fn event(&self, id: i64) -> Result<Event> {
        self.fetch_by_id(self.sql().event_by_id, id, "Event").await
    }

    pub async fn event_fights(&self, id: i64) -> Result<Vec<Bout>> {
        self.fetch_all_by(self.sql().event_fights, id).await
    }

    // -----------------------------------------------------------------------
    // Fights
    // -----------------------------------------------------------------------

    pub async fn fights(&self, page: Page) -> Result<Vec<Bout>> {
        let bouts = sqlx::query_as::<_, Bout>(self.sql().list_fights)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(bouts)
    }

    /// Bout plus both participants' bios and stats. The three reads are not
    /// wrapped in a transaction.
    pub async fn fight(&self, id: i64) -> Result<FightDetail> {
        let bout: Bout = self.fetch_by_id(self.sql().fight_by_id, id, "Fight").await?;

        let fighters = sqlx::query_as::<_, Fighter>(self.sql().fighters_by_ids)
            .bind(bout.fighter1_id)
            .bind(bout.fighter2_id)
            .fetch_all(&self.pool)
            .await?;
        let stats = sqlx::query_as::<_, FighterStats>(self.sql().stats_by_ids)
            .bind(bout.fighter1_id)
            .bind(bout.fighter2_id)
            .fetch_all(&self.pool)
            .await?;

        let participant = |id: Option<i64>| -> Option<Participant> {
            let id = id?;
            let fighter = fighters.iter().find(|f| f.fighter_id == id)?.clone();
            let stats = stats
                .iter()
                .find(|s| s.fighter_id == id)
                .map(|s| s.career.clone());
            Some(Participant { fighter, stats })
        };

        Ok(FightDetail {
            fighter1: participant(bout.fighter1_id),
            fighter2: participant(bout.fighter2_id),
            bout,
        })
    }

    /// Every bout between the two fighters, in either corner assignment.
    pub async fn matchup(&self, fighter_a: i64, fighter_b: i64) -> Result<Vec<Bout>> {
        let bouts = sqlx::query_as::<_, Bout>(self.sql().matchup)
            .bind(fighter_a)
            .bind(fighter_b)
            .fetch_all(&self.pool)
            .await?;
        Ok(bouts)
    }

    pub async fn recent_fights(&self, limit: i64) -> Result<Vec<Bout>> {
        self.fetch_all_by(self.sql().recent_fights, limit).await
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    pub async fn top_strikers(&self, limit: i64) -> Result<Vec<RankedFighter>> {
        self.fetch_all_by(self.sql().top_strikers, limit).await
    }

    pub async fn top_grapplers(&self, limit: i64) -> Result<Vec<RankedFighter>> {
        self.fetch_all_by(self.sql().top_grapplers, limit).await
    }

    pub async fn top_records(&self, limit: i64) -> Result<Vec<RecordRank>> {
        self.fetch_all_by(self.sql().top_records, limit).await
    }

    pub async fn most_active(&self, limit: i64) -> Result<Vec<ActivityRank>> {
        self.fetch_all_by(self.sql().most_active, limit).await
    }

    pub async fn stance_distribution(&self) -> Result<Vec<StanceCount>> {
        let counts = sqlx::query_as::<_, StanceCount>(self.sql().stance_distribution)
            .fetch_all(&self.pool)
            .await?;
        Ok(counts)
    }

    pub async fn summary(&self) -> Result<DatabaseSummary> {
        let sql = self.sql();
        let total_events = self.count(sql.count_events).await?;
        let total_fighters = self.count(sql.count_fighters).await?;
        let total_fights = self.count(sql.count_fights).await?;
        let recent_events = self
            .fetch_all_by(sql.recent_events, SUMMARY_RECENT_EVENTS)
            .await?;

        Ok(DatabaseSummary {
            total_events,
            total_fighters,
            total_fights,
            recent_events,
        })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn fetch_by_id<T>(&self, sql: &'static str, id: i64, entity: &'static str) -> Result<T>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        sqlx::query_as::<_, T>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(entity))
    }

    async fn fetch_all_by<T>(&self, sql: &'static str, arg: i64) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let rows = sqlx::query_as::<_, T>(sql)
            .bind(arg)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count(&self, sql: &'static str) -> Result<i64> {
        let n: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(n)
    }
}

async fn table_exists(pool: &SqlitePool, name: &str) -> Result<bool> {
    let n: i64 = sqlx::query_scalar(TABLE_EXISTS)
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(n > 0)
}

async fn detect_profile(pool: &SqlitePool) -> Result<SchemaProfile> {
    if table_exists(pool, "fight_results").await? {
        return Ok(SchemaProfile::Denormalized);
    }
    if table_exists(pool, "fights").await? {
        return Ok(SchemaProfile::Normalized);
    }
    Err(AppError::Schema(
        "database has neither a fights nor a fight_results table".to_string(),
    ))
}
