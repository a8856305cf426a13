use crate::error::{AppError, Result};

/// SQLite file produced by the ingestion tool. Not configurable.
pub const DB_PATH: &str = "ufc_stats.db";

pub const DEFAULT_PORT: u16 = 3000;

/// Upper bound on pooled SQLite connections.
pub const DB_MAX_CONNECTIONS: u32 = 5;

/// Request body cap for JSON payloads. No route reads a body today.
pub const JSON_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Number of events listed in the database summary.
pub const SUMMARY_RECENT_EVENTS: i64 = 5;

/// Default page sizes per listing.
pub mod page_defaults {
    pub const FIGHTERS: i64 = 100;
    pub const FIGHTER_SEARCH: i64 = 20;
    pub const FIGHTS: i64 = 50;
    pub const RECENT_FIGHTS: i64 = 10;
    pub const LEADERBOARD: i64 = 10;
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub db_path: String,
    /// Open the database read-only (DB_READ_ONLY, default true).
    pub db_read_only: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            db_path: DB_PATH.to_string(),
            db_read_only: parse_flag(std::env::var("DB_READ_ONLY").ok().as_deref(), true),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| AppError::Config("PORT must be a valid port number".to_string())),
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("1") | Some("true") | Some("yes") => true,
        Some("0") | Some("false") | Some("no") => false,
        _ => default,
    }
}
