/// Row types for both schema profiles.
/// Columns a profile does not store are selected as NULL so one shape serves both.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Fighter {
    pub fighter_id: i64,
    pub name: String,
    pub nickname: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub reach: Option<String>,
    pub stance: Option<String>,
    pub dob: Option<String>,
}

/// Career rates. Percentages are stored as 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct CareerStats {
    /// Significant strikes landed per minute.
    pub slpm: Option<f64>,
    pub str_acc: Option<f64>,
    /// Significant strikes absorbed per minute.
    pub sapm: Option<f64>,
    pub str_def: Option<f64>,
    /// Takedowns landed per 15 minutes.
    pub td_avg: Option<f64>,
    pub td_acc: Option<f64>,
    pub td_def: Option<f64>,
    /// Submission attempts per 15 minutes.
    pub sub_avg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct FighterStats {
    pub fighter_id: i64,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub career: CareerStats,
}

/// Fighter left-joined with career stats; stats fields are null when absent.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct FighterProfile {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fighter: Fighter,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub career: CareerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Event {
    pub event_id: i64,
    pub event_name: String,
    pub event_date: Option<String>,
    pub event_location: Option<String>,
}

/// One bout seen from a single fighter's side.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct HistoryEntry {
    pub fight_id: i64,
    pub event_id: Option<i64>,
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub opponent_id: Option<i64>,
    pub opponent: Option<String>,
    pub result: Option<String>,
    pub method: Option<String>,
    pub method_detail: Option<String>,
    pub round: Option<i64>,
    pub time: Option<String>,
    pub weight_class: Option<String>,
    pub knockdowns: Option<i64>,
    pub sig_strikes: Option<i64>,
    pub takedowns: Option<i64>,
    pub sub_attempts: Option<i64>,
}

/// One bout with both participants. Per-fighter counters are only
/// populated by the denormalized profile.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Bout {
    pub fight_id: i64,
    pub event_id: Option<i64>,
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub fighter1_id: Option<i64>,
    pub fighter1_name: Option<String>,
    pub fighter2_id: Option<i64>,
    pub fighter2_name: Option<String>,
    pub winner_id: Option<i64>,
    pub winner_name: Option<String>,
    pub method: Option<String>,
    pub method_detail: Option<String>,
    pub round: Option<i64>,
    pub time: Option<String>,
    pub weight_class: Option<String>,
    pub fighter1_kd: Option<i64>,
    pub fighter1_sig_str: Option<i64>,
    pub fighter1_td: Option<i64>,
    pub fighter1_sub: Option<i64>,
    pub fighter2_kd: Option<i64>,
    pub fighter2_sig_str: Option<i64>,
    pub fighter2_td: Option<i64>,
    pub fighter2_sub: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    #[serde(flatten)]
    pub fighter: Fighter,
    pub stats: Option<CareerStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FightDetail {
    #[serde(flatten)]
    pub bout: Bout,
    pub fighter1: Option<Participant>,
    pub fighter2: Option<Participant>,
}

/// Outcome totals over a fighter's bouts.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct FightTotals {
    pub total_fights: i64,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub no_contests: i64,
    pub ko_wins: i64,
    pub submission_wins: i64,
    pub avg_sig_strikes: Option<f64>,
    pub avg_takedowns: Option<f64>,
    pub total_knockdowns: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterRecord {
    pub fighter_id: i64,
    pub name: String,
    #[serde(flatten)]
    pub totals: FightTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct RankedFighter {
    pub fighter_id: i64,
    pub name: String,
    pub nickname: Option<String>,
    pub stance: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub career: CareerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct RecordRank {
    pub fighter_id: i64,
    pub name: String,
    pub nickname: Option<String>,
    pub wins: i64,
    pub losses: i64,
    /// Bouts without a winner (draws and no-contests).
    pub draws: i64,
    pub total_fights: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ActivityRank {
    pub fighter_id: i64,
    pub name: String,
    pub fight_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct StanceCount {
    pub stance: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseSummary {
    pub total_events: i64,
    pub total_fighters: i64,
    pub total_fights: i64,
    pub recent_events: Vec<Event>,
}
