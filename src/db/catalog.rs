//! Fixed SQL catalog, one statement per operation for each schema profile.
//!
//! Statements bind numbered parameters (`?1`, `?2`) so both profiles take the
//! same arguments even when one of them references a parameter twice.
//! Numeric columns are cast because ingestion stores some of them as text
//! (`"55%"`, `"17 of 40"`); SQLite keeps the leading number.

macro_rules! fighter_columns {
    () => {
        "f.fighter_id, f.name, f.nickname, \
         CAST(f.height AS TEXT) AS height, CAST(f.weight AS TEXT) AS weight, \
         CAST(f.reach AS TEXT) AS reach, f.stance, f.dob"
    };
}

macro_rules! career_columns {
    ($t:literal) => {
        concat!(
            "CAST(", $t, ".slpm AS REAL) AS slpm, ",
            "CAST(", $t, ".str_acc AS REAL) AS str_acc, ",
            "CAST(", $t, ".sapm AS REAL) AS sapm, ",
            "CAST(", $t, ".str_def AS REAL) AS str_def, ",
            "CAST(", $t, ".td_avg AS REAL) AS td_avg, ",
            "CAST(", $t, ".td_acc AS REAL) AS td_acc, ",
            "CAST(", $t, ".td_def AS REAL) AS td_def, ",
            "CAST(", $t, ".sub_avg AS REAL) AS sub_avg"
        )
    };
}

/// True when at least one career rate is recorded on the fighter row.
macro_rules! has_career_stats {
    () => {
        "COALESCE(f.slpm, f.str_acc, f.sapm, f.str_def, f.td_avg, f.td_acc, f.td_def, f.sub_avg) IS NOT NULL"
    };
}

macro_rules! event_columns {
    () => {
        "event_id, event_name, event_date, event_location"
    };
}

macro_rules! normalized_bout_select {
    () => {
        "SELECT fi.fight_id, fi.event_id, e.event_name, e.event_date, \
                fi.fighter1_id, f1.name AS fighter1_name, \
                fi.fighter2_id, f2.name AS fighter2_name, \
                fi.winner_id, w.name AS winner_name, \
                fi.method, NULL AS method_detail, CAST(fi.round AS INTEGER) AS round, fi.time, fi.weight_class, \
                NULL AS fighter1_kd, NULL AS fighter1_sig_str, NULL AS fighter1_td, NULL AS fighter1_sub, \
                NULL AS fighter2_kd, NULL AS fighter2_sig_str, NULL AS fighter2_td, NULL AS fighter2_sub \
         FROM fights fi \
         LEFT JOIN events e ON e.event_id = fi.event_id \
         LEFT JOIN fighters f1 ON f1.fighter_id = fi.fighter1_id \
         LEFT JOIN fighters f2 ON f2.fighter_id = fi.fighter2_id \
         LEFT JOIN fighters w ON w.fighter_id = fi.winner_id"
    };
}

/// Pairs each fight_results row `a` with its mirror `b`.
macro_rules! denormalized_bout_select {
    () => {
        "SELECT a.fight_id, a.event_id, e.event_name, e.event_date, \
                a.fighter_id AS fighter1_id, f1.name AS fighter1_name, \
                b.fighter_id AS fighter2_id, f2.name AS fighter2_name, \
                CASE a.result WHEN 'Win' THEN a.fighter_id WHEN 'Loss' THEN b.fighter_id ELSE NULL END AS winner_id, \
                CASE a.result WHEN 'Win' THEN f1.name WHEN 'Loss' THEN f2.name ELSE NULL END AS winner_name, \
                a.method, a.method_detail, CAST(a.round AS INTEGER) AS round, a.time, NULL AS weight_class, \
                CAST(a.kd AS INTEGER) AS fighter1_kd, CAST(a.sig_str AS INTEGER) AS fighter1_sig_str, \
                CAST(a.td AS INTEGER) AS fighter1_td, CAST(a.sub AS INTEGER) AS fighter1_sub, \
                CAST(b.kd AS INTEGER) AS fighter2_kd, CAST(b.sig_str AS INTEGER) AS fighter2_sig_str, \
                CAST(b.td AS INTEGER) AS fighter2_td, CAST(b.sub AS INTEGER) AS fighter2_sub \
         FROM fight_results a \
         JOIN fight_results b ON b.event_id = a.event_id \
                             AND b.fighter_id = a.opponent_id \
                             AND b.opponent_id = a.fighter_id \
         LEFT JOIN events e ON e.event_id = a.event_id \
         LEFT JOIN fighters f1 ON f1.fighter_id = a.fighter_id \
         LEFT JOIN fighters f2 ON f2.fighter_id = b.fighter_id"
    };
}

/// Method/outcome classification shared by both profiles.
macro_rules! ko_method {
    ($m:literal) => {
        concat!("COALESCE(", $m, ", '') LIKE '%KO%'")
    };
}

macro_rules! sub_method {
    ($m:literal) => {
        concat!("COALESCE(", $m, ", '') LIKE '%SUB%'")
    };
}

macro_rules! nc_method {
    ($m:literal) => {
        concat!("UPPER(COALESCE(", $m, ", '')) IN ('NC', 'NO CONTEST', 'OVERTURNED')")
    };
}

/// Base statement for fighter listings; filters and paging are appended by
/// the query builder.
pub const FIGHTER_LIST_BASE: &str = concat!("SELECT ", fighter_columns!(), " FROM fighters f");

/// Columns searched by the free-text fighter filter.
pub const FIGHTER_SEARCH_COLUMNS: &[&str] = &["f.name", "f.nickname"];

pub const FIGHTER_STANCE_COLUMN: &str = "f.stance";

pub const FIGHTER_LIST_ORDER: &str = " ORDER BY f.name ASC, f.fighter_id ASC";

pub const PROBE: &str = "SELECT 1";

pub const TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";

/// Statements for one schema profile.
#[derive(Debug)]
pub struct Catalog {
    /// ?1 = fighter id
    pub fighter_by_id: &'static str,
    /// ?1 = name substring
    pub fighter_by_name: &'static str,
    /// ?1 = fighter id
    pub fighter_profile: &'static str,
    /// ?1 = fighter id
    pub fighter_stats: &'static str,
    /// ?1, ?2 = fighter ids
    pub fighters_by_ids: &'static str,
    /// ?1, ?2 = fighter ids
    pub stats_by_ids: &'static str,
    /// ?1 = fighter id
    pub fighter_history: &'static str,
    /// ?1 = fighter id
    pub fighter_totals: &'static str,
    pub list_events: &'static str,
    /// ?1 = event id
    pub event_by_id: &'static str,
    /// ?1 = event id
    pub event_fights: &'static str,
    /// ?1 = limit, ?2 = offset
    pub list_fights: &'static str,
    /// ?1 = fight id
    pub fight_by_id: &'static str,
    /// ?1, ?2 = fighter ids
    pub matchup: &'static str,
    /// ?1 = limit
    pub recent_fights: &'static str,
    /// ?1 = limit
    pub top_strikers: &'static str,
    /// ?1 = limit
    pub top_grapplers: &'static str,
    /// ?1 = limit
    pub top_records: &'static str,
    /// ?1 = limit
    pub most_active: &'static str,
    pub stance_distribution: &'static str,
    pub count_events: &'static str,
    pub count_fighters: &'static str,
    pub count_fights: &'static str,
    /// ?1 = limit
    pub recent_events: &'static str,
}

const FIGHTER_BY_ID: &str = concat!("SELECT ", fighter_columns!(), " FROM fighters f WHERE f.fighter_id = ?1");

const FIGHTER_BY_NAME: &str = concat!(
    "SELECT ", fighter_columns!(),
    " FROM fighters f WHERE f.name LIKE '%' || ?1 || '%' ORDER BY f.fighter_id ASC LIMIT 1"
);

const FIGHTERS_BY_IDS: &str = concat!(
    "SELECT ", fighter_columns!(),
    " FROM fighters f WHERE f.fighter_id IN (?1, ?2) ORDER BY f.fighter_id"
);

const LIST_EVENTS: &str = concat!(
    "SELECT ", event_columns!(), " FROM events ORDER BY event_date DESC, event_id DESC"
);

const EVENT_BY_ID: &str = concat!("SELECT ", event_columns!(), " FROM events WHERE event_id = ?1");

const RECENT_EVENTS: &str = concat!(
    "SELECT ", event_columns!(), " FROM events ORDER BY event_date DESC, event_id DESC LIMIT ?1"
);

const STANCE_DISTRIBUTION: &str = "SELECT stance, COUNT(*) AS count FROM fighters \
     WHERE stance IS NOT NULL AND TRIM(stance) <> '' AND stance <> 'N/A' \
     GROUP BY stance ORDER BY count DESC, stance ASC";

const COUNT_EVENTS: &str = "SELECT COUNT(*) FROM events";

const COUNT_FIGHTERS: &str = "SELECT COUNT(*) FROM fighters";

pub const NORMALIZED: Catalog = Catalog {
    fighter_by_id: FIGHTER_BY_ID,
    fighter_by_name: FIGHTER_BY_NAME,
    fighter_profile: concat!(
        "SELECT ", fighter_columns!(), ", ", career_columns!("s"),
        " FROM fighters f LEFT JOIN fighter_stats s ON s.fighter_id = f.fighter_id",
        " WHERE f.fighter_id = ?1"
    ),
    fighter_stats: concat!(
        "SELECT s.fighter_id, ", career_columns!("s"),
        " FROM fighter_stats s WHERE s.fighter_id = ?1"
    ),
    fighters_by_ids: FIGHTERS_BY_IDS,
    stats_by_ids: concat!(
        "SELECT s.fighter_id, ", career_columns!("s"),
        " FROM fighter_stats s WHERE s.fighter_id IN (?1, ?2) ORDER BY s.fighter_id"
    ),
    fighter_history: "SELECT fi.fight_id, fi.event_id, e.event_name, e.event_date, \
            CASE WHEN fi.fighter1_id = ?1 THEN fi.fighter2_id ELSE fi.fighter1_id END AS opponent_id, \
            o.name AS opponent, \
            CASE WHEN fi.winner_id IS NULL THEN 'Draw/NC' \
                 WHEN fi.winner_id = ?1 THEN 'Win' \
                 ELSE 'Loss' END AS result, \
            fi.method, NULL AS method_detail, CAST(fi.round AS INTEGER) AS round, fi.time, fi.weight_class, \
            NULL AS knockdowns, NULL AS sig_strikes, NULL AS takedowns, NULL AS sub_attempts \
        FROM fights fi \
        LEFT JOIN events e ON e.event_id = fi.event_id \
        LEFT JOIN fighters o \
            ON o.fighter_id = CASE WHEN fi.fighter1_id = ?1 THEN fi.fighter2_id ELSE fi.fighter1_id END \
        WHERE fi.fighter1_id = ?1 OR fi.fighter2_id = ?1 \
        ORDER BY e.event_date DESC, fi.fight_id DESC",
    fighter_totals: concat!(
        "SELECT COUNT(*) AS total_fights, ",
        "COALESCE(SUM(CASE WHEN winner_id = ?1 THEN 1 ELSE 0 END), 0) AS wins, ",
        "COALESCE(SUM(CASE WHEN winner_id IS NOT NULL AND winner_id <> ?1 THEN 1 ELSE 0 END), 0) AS losses, ",
        "COALESCE(SUM(CASE WHEN winner_id IS NULL AND NOT ", nc_method!("method"), " THEN 1 ELSE 0 END), 0) AS draws, ",
        "COALESCE(SUM(CASE WHEN winner_id IS NULL AND ", nc_method!("method"), " THEN 1 ELSE 0 END), 0) AS no_contests, ",
        "COALESCE(SUM(CASE WHEN winner_id = ?1 AND ", ko_method!("method"), " THEN 1 ELSE 0 END), 0) AS ko_wins, ",
        "COALESCE(SUM(CASE WHEN winner_id = ?1 AND ", sub_method!("method"), " THEN 1 ELSE 0 END), 0) AS submission_wins, ",
        "NULL AS avg_sig_strikes, NULL AS avg_takedowns, NULL AS total_knockdowns ",
        "FROM fights WHERE fighter1_id = ?1 OR fighter2_id = ?1"
    ),
    list_events: LIST_EVENTS,
    event_by_id: EVENT_BY_ID,
    event_fights: concat!(normalized_bout_select!(), " WHERE fi.event_id = ?1 ORDER BY fi.fight_id ASC"),
    list_fights: concat!(
        normalized_bout_select!(),
        " ORDER BY e.event_date DESC, fi.fight_id DESC LIMIT ?1 OFFSET ?2"
    ),
    fight_by_id: concat!(normalized_bout_select!(), " WHERE fi.fight_id = ?1"),
    matchup: concat!(
        normalized_bout_select!(),
        " WHERE (fi.fighter1_id = ?1 AND fi.fighter2_id = ?2)",
        " OR (fi.fighter1_id = ?2 AND fi.fighter2_id = ?1)",
        " ORDER BY e.event_date DESC, fi.fight_id DESC"
    ),
    recent_fights: concat!(
        normalized_bout_select!(),
        " ORDER BY e.event_date DESC, fi.fight_id DESC LIMIT ?1"
    ),
    top_strikers: concat!(
        "SELECT f.fighter_id, f.name, f.nickname, f.stance, ", career_columns!("s"),
        " FROM fighters f JOIN fighter_stats s ON s.fighter_id = f.fighter_id",
        " WHERE s.slpm IS NOT NULL",
        " ORDER BY CAST(s.slpm AS REAL) DESC, f.name ASC LIMIT ?1"
    ),
    top_grapplers: concat!(
        "SELECT f.fighter_id, f.name, f.nickname, f.stance, ", career_columns!("s"),
        " FROM fighters f JOIN fighter_stats s ON s.fighter_id = f.fighter_id",
        " WHERE s.td_avg IS NOT NULL",
        " ORDER BY CAST(s.td_avg AS REAL) DESC, f.name ASC LIMIT ?1"
    ),
    top_records: "SELECT f.fighter_id, f.name, f.nickname, \
            SUM(CASE WHEN fi.winner_id = f.fighter_id THEN 1 ELSE 0 END) AS wins, \
            SUM(CASE WHEN fi.winner_id IS NOT NULL AND fi.winner_id <> f.fighter_id THEN 1 ELSE 0 END) AS losses, \
            SUM(CASE WHEN fi.winner_id IS NULL THEN 1 ELSE 0 END) AS draws, \
            COUNT(*) AS total_fights \
        FROM fighters f \
        JOIN fights fi ON fi.fighter1_id = f.fighter_id OR fi.fighter2_id = f.fighter_id \
        GROUP BY f.fighter_id \
        ORDER BY wins DESC, losses ASC, f.name ASC \
        LIMIT ?1",
    most_active: "SELECT f.fighter_id, f.name, COUNT(*) AS fight_count \
        FROM fighters f \
        JOIN fights fi ON fi.fighter1_id = f.fighter_id OR fi.fighter2_id = f.fighter_id \
        GROUP BY f.fighter_id \
        ORDER BY fight_count DESC, f.name ASC \
        LIMIT ?1",
    stance_distribution: STANCE_DISTRIBUTION,
    count_events: COUNT_EVENTS,
    count_fighters: COUNT_FIGHTERS,
    count_fights: "SELECT COUNT(*) FROM fights",
    recent_events: RECENT_EVENTS,
};

pub const DENORMALIZED: Catalog = Catalog {
    fighter_by_id: FIGHTER_BY_ID,
    fighter_by_name: FIGHTER_BY_NAME,
    fighter_profile: concat!(
        "SELECT ", fighter_columns!(), ", ", career_columns!("f"),
        " FROM fighters f WHERE f.fighter_id = ?1"
    ),
    fighter_stats: concat!(
        "SELECT f.fighter_id, ", career_columns!("f"),
        " FROM fighters f WHERE f.fighter_id = ?1 AND ", has_career_stats!()
    ),
    fighters_by_ids: FIGHTERS_BY_IDS,
    stats_by_ids: concat!(
        "SELECT f.fighter_id, ", career_columns!("f"),
        " FROM fighters f WHERE f.fighter_id IN (?1, ?2) AND ", has_career_stats!(),
        " ORDER BY f.fighter_id"
    ),
    fighter_history: "SELECT fr.fight_id, fr.event_id, e.event_name, e.event_date, \
            fr.opponent_id, o.name AS opponent, fr.result, \
            fr.method, fr.method_detail, CAST(fr.round AS INTEGER) AS round, fr.time, NULL AS weight_class, \
            CAST(fr.kd AS INTEGER) AS knockdowns, CAST(fr.sig_str AS INTEGER) AS sig_strikes, \
            CAST(fr.td AS INTEGER) AS takedowns, CAST(fr.sub AS INTEGER) AS sub_attempts \
        FROM fight_results fr \
        LEFT JOIN events e ON e.event_id = fr.event_id \
        LEFT JOIN fighters o ON o.fighter_id = fr.opponent_id \
        WHERE fr.fighter_id = ?1 \
        ORDER BY e.event_date DESC, fr.fight_id DESC",
    fighter_totals: concat!(
        "SELECT COUNT(*) AS total_fights, ",
        "COALESCE(SUM(CASE WHEN result = 'Win' THEN 1 ELSE 0 END), 0) AS wins, ",
        "COALESCE(SUM(CASE WHEN result = 'Loss' THEN 1 ELSE 0 END), 0) AS losses, ",
        "COALESCE(SUM(CASE WHEN result = 'Draw' THEN 1 ELSE 0 END), 0) AS draws, ",
        "COALESCE(SUM(CASE WHEN ", nc_method!("result"), " THEN 1 ELSE 0 END), 0) AS no_contests, ",
        "COALESCE(SUM(CASE WHEN result = 'Win' AND ", ko_method!("method"), " THEN 1 ELSE 0 END), 0) AS ko_wins, ",
        "COALESCE(SUM(CASE WHEN result = 'Win' AND ", sub_method!("method"), " THEN 1 ELSE 0 END), 0) AS submission_wins, ",
        "AVG(CAST(sig_str AS INTEGER)) AS avg_sig_strikes, ",
        "AVG(CAST(td AS INTEGER)) AS avg_takedowns, ",
        "COALESCE(SUM(CAST(kd AS INTEGER)), 0) AS total_knockdowns ",
        "FROM fight_results WHERE fighter_id = ?1"
    ),
    list_events: LIST_EVENTS,
    event_by_id: EVENT_BY_ID,
    event_fights: concat!(
        denormalized_bout_select!(),
        " WHERE a.fight_id < b.fight_id AND a.event_id = ?1 ORDER BY a.fight_id ASC"
    ),
    list_fights: concat!(
        denormalized_bout_select!(),
        " WHERE a.fight_id < b.fight_id",
        " ORDER BY e.event_date DESC, a.fight_id DESC LIMIT ?1 OFFSET ?2"
    ),
    fight_by_id: concat!(denormalized_bout_select!(), " WHERE a.fight_id = ?1"),
    matchup: concat!(
        denormalized_bout_select!(),
        " WHERE a.fight_id < b.fight_id",
        " AND ((a.fighter_id = ?1 AND b.fighter_id = ?2) OR (a.fighter_id = ?2 AND b.fighter_id = ?1))",
        " ORDER BY e.event_date DESC, a.fight_id DESC"
    ),
    recent_fights: concat!(
        denormalized_bout_select!(),
        " WHERE a.fight_id < b.fight_id",
        " ORDER BY e.event_date DESC, a.fight_id DESC LIMIT ?1"
    ),
    top_strikers: concat!(
        "SELECT f.fighter_id, f.name, f.nickname, f.stance, ", career_columns!("f"),
        " FROM fighters f WHERE f.slpm IS NOT NULL",
        " ORDER BY CAST(f.slpm AS REAL) DESC, f.name ASC LIMIT ?1"
    ),
    top_grapplers: concat!(
        "SELECT f.fighter_id, f.name, f.nickname, f.stance, ", career_columns!("f"),
        " FROM fighters f WHERE f.td_avg IS NOT NULL",
        " ORDER BY CAST(f.td_avg AS REAL) DESC, f.name ASC LIMIT ?1"
    ),
    top_records: "SELECT f.fighter_id, f.name, f.nickname, \
            SUM(CASE WHEN fr.result = 'Win' THEN 1 ELSE 0 END) AS wins, \
            SUM(CASE WHEN fr.result = 'Loss' THEN 1 ELSE 0 END) AS losses, \
            SUM(CASE WHEN COALESCE(fr.result, '') NOT IN ('Win', 'Loss') THEN 1 ELSE 0 END) AS draws, \
            COUNT(*) AS total_fights \
        FROM fighters f \
        JOIN fight_results fr ON fr.fighter_id = f.fighter_id \
        GROUP BY f.fighter_id \
        ORDER BY wins DESC, losses ASC, f.name ASC \
        LIMIT ?1",
    most_active: "SELECT f.fighter_id, f.name, COUNT(*) AS fight_count \
        FROM fighters f \
        JOIN fight_results fr ON fr.fighter_id = f.fighter_id \
        GROUP BY f.fighter_id \
        ORDER BY fight_count DESC, f.name ASC \
        LIMIT ?1",
    stance_distribution: STANCE_DISTRIBUTION,
    count_events: COUNT_EVENTS,
    count_fighters: COUNT_FIGHTERS,
    count_fights: "SELECT COUNT(*) FROM fight_results a \
        JOIN fight_results b ON b.event_id = a.event_id \
                            AND b.fighter_id = a.opponent_id \
                            AND b.opponent_id = a.fighter_id \
        WHERE a.fight_id < b.fight_id",
    recent_events: RECENT_EVENTS,
};
