//! In-memory databases seeded with the same small card in both schema profiles.
//!
//! Ten fighters (6 Orthodox, 3 Southpaw, 1 N/A), three events, six bouts:
//!
//! | bout | event | corners            | outcome                    |
//! |------|-------|--------------------|----------------------------|
//! | 1    | 1     | Pereira v Hill     | Pereira, KO/TKO            |
//! | 2    | 1     | Holloway v Gaethje | Holloway, KO/TKO           |
//! | 3    | 2     | Pantoja v Erceg    | Pantoja, decision          |
//! | 4    | 3     | Makhachev v Poirier| Makhachev, submission      |
//! | 5    | 3     | Hill v Pereira     | draw                       |
//! | 6    | 2     | Gaethje v Poirier  | no contest (overturned)    |
//!
//! Zhang and Erceg have no stats; the N/A prospect has stats without rates
//! for striking or takedowns.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::db::{SchemaProfile, Store};

pub mod ids {
    pub const PEREIRA: i64 = 1;
    pub const HILL: i64 = 2;
    pub const HOLLOWAY: i64 = 3;
    pub const GAETHJE: i64 = 4;
    pub const MAKHACHEV: i64 = 5;
    pub const POIRIER: i64 = 6;
    pub const PANTOJA: i64 = 7;
    pub const ERCEG: i64 = 8;
    pub const ZHANG: i64 = 9;
    pub const PROSPECT: i64 = 10;
}

const NORMALIZED_SCHEMA: &str = include_str!("../../schema/normalized.sql");
const DENORMALIZED_SCHEMA: &str = include_str!("../../schema/denormalized.sql");

const EVENTS: &str = "
INSERT INTO events (event_id, event_name, event_date, event_location) VALUES
    (1, 'UFC 300', '2024-04-13', 'Las Vegas, Nevada, USA'),
    (2, 'UFC 301', '2024-05-04', 'Rio de Janeiro, Brazil'),
    (3, 'UFC 302', '2024-06-01', 'Newark, New Jersey, USA');
";

const FIGHTERS: &str = "
INSERT INTO fighters (fighter_id, name, nickname, height, weight, reach, stance, dob) VALUES
    (1, 'Alex Pereira', 'Poatan', '6'' 4\"', '205 lbs.', '79\"', 'Orthodox', 'Jul 07, 1987'),
    (2, 'Jamahal Hill', 'Sweet Dreams', '6'' 4\"', '205 lbs.', '79\"', 'Southpaw', 'May 19, 1991'),
    (3, 'Max Holloway', 'Blessed', '5'' 11\"', '145 lbs.', '69\"', 'Orthodox', 'Dec 04, 1991'),
    (4, 'Justin Gaethje', 'The Highlight', '5'' 11\"', '155 lbs.', '70\"', 'Orthodox', 'Nov 14, 1988'),
    (5, 'Islam Makhachev', NULL, '5'' 10\"', '155 lbs.', '70\"', 'Southpaw', 'Oct 27, 1991'),
    (6, 'Dustin Poirier', 'The Diamond', '5'' 9\"', '155 lbs.', '72\"', 'Southpaw', 'Jan 19, 1989'),
    (7, 'Alexandre Pantoja', 'The Cannibal', '5'' 5\"', '125 lbs.', '67\"', 'Orthodox', 'Apr 16, 1990'),
    (8, 'Steve Erceg', NULL, '5'' 8\"', '125 lbs.', '68\"', 'Orthodox', 'Nov 17, 1995'),
    (9, 'Zhang Weili', 'Magnum', '5'' 4\"', '115 lbs.', '63\"', 'Orthodox', 'Aug 13, 1989'),
    (10, 'Unknown Prospect', NULL, NULL, NULL, NULL, 'N/A', NULL);
";

/// (fighter_id, slpm, str_acc, sapm, str_def, td_avg, td_acc, td_def, sub_avg)
const STATS: &[(i64, &str)] = &[
    (1, "5.1, 62, 3.6, 53, 0.1, 50, 71, 0.3"),
    (2, "3.8, 50, 4.1, 52, 0.0, 0, 68, 0.0"),
    (3, "7.2, 48, 4.7, 59, 0.3, 40, 84, 0.3"),
    (4, "6.4, 60, 7.5, 53, 0.1, 20, 72, 0.0"),
    (5, "2.5, 60, 1.6, 64, 3.2, 58, 90, 1.0"),
    (6, "5.5, 51, 4.3, 54, 1.3, 35, 63, 1.1"),
    (7, "4.0, 48, 3.9, 54, 1.9, 40, 66, 1.3"),
    (10, "NULL, NULL, NULL, 40, NULL, NULL, NULL, NULL"),
];

const FIGHTS: &str = "
INSERT INTO fights (fight_id, event_id, fighter1_id, fighter2_id, winner_id, method, round, time, weight_class) VALUES
    (1, 1, 1, 2, 1, 'KO/TKO', 1, '3:14', 'Light Heavyweight'),
    (2, 1, 3, 4, 3, 'KO/TKO', 5, '4:59', 'Lightweight'),
    (3, 2, 7, 8, 7, 'Decision - Unanimous', 5, '5:00', 'Flyweight'),
    (4, 3, 5, 6, 5, 'Submission', 5, '2:42', 'Lightweight'),
    (5, 3, 2, 1, NULL, 'Decision - Majority', 3, '5:00', 'Light Heavyweight'),
    (6, 2, 4, 6, NULL, 'Overturned', 2, '1:10', 'Lightweight');
";

/// Two mirrored rows per bout, in bout order.
const FIGHT_RESULTS: &str = "
INSERT INTO fight_results
    (fight_id, event_id, fighter_id, opponent_id, kd, sig_str, td, sub, result, method, method_detail, round, time)
VALUES
    (1, 1, 1, 2, 1, 23, 0, 0, 'Win', 'KO/TKO', 'Punch to Head', 1, '3:14'),
    (2, 1, 2, 1, 0, 9, 0, 0, 'Loss', 'KO/TKO', 'Punch to Head', 1, '3:14'),
    (3, 1, 3, 4, 1, 112, 0, 0, 'Win', 'KO/TKO', 'Punch to Head', 5, '4:59'),
    (4, 1, 4, 3, 0, 89, 0, 0, 'Loss', 'KO/TKO', 'Punch to Head', 5, '4:59'),
    (5, 2, 7, 8, 0, 84, 2, 1, 'Win', 'Decision - Unanimous', NULL, 5, '5:00'),
    (6, 2, 8, 7, 0, 61, 0, 0, 'Loss', 'Decision - Unanimous', NULL, 5, '5:00'),
    (7, 3, 5, 6, 0, 57, 3, 2, 'Win', 'Submission', 'Brabo Choke', 5, '2:42'),
    (8, 3, 6, 5, 0, 69, 0, 0, 'Loss', 'Submission', 'Brabo Choke', 5, '2:42'),
    (9, 3, 2, 1, 0, 38, 0, 0, 'Draw', 'Decision - Majority', NULL, 3, '5:00'),
    (10, 3, 1, 2, 0, 41, 1, 0, 'Draw', 'Decision - Majority', NULL, 3, '5:00'),
    (11, 2, 4, 6, 0, 18, 0, 0, 'NC', 'Overturned', 'Eye Poke', 2, '1:10'),
    (12, 2, 6, 4, 0, 12, 0, 0, 'NC', 'Overturned', 'Eye Poke', 2, '1:10');
";

/// A single in-memory connection; the database lives as long as the pool.
pub async fn empty_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

pub async fn seeded_pool(profile: SchemaProfile) -> SqlitePool {
    let pool = empty_pool().await;

    let mut script = String::new();
    match profile {
        SchemaProfile::Normalized => {
            script.push_str(NORMALIZED_SCHEMA);
            script.push_str(EVENTS);
            script.push_str(FIGHTERS);
            for (id, rates) in STATS {
                script.push_str(&format!(
                    "INSERT INTO fighter_stats \
                     (fighter_id, slpm, str_acc, sapm, str_def, td_avg, td_acc, td_def, sub_avg) \
                     VALUES ({id}, {rates});\n"
                ));
            }
            script.push_str(FIGHTS);
        }
        SchemaProfile::Denormalized => {
            script.push_str(DENORMALIZED_SCHEMA);
            script.push_str(EVENTS);
            script.push_str(FIGHTERS);
            for (id, rates) in STATS {
                script.push_str(&format!(
                    "UPDATE fighters SET \
                     (slpm, str_acc, sapm, str_def, td_avg, td_acc, td_def, sub_avg) = ({rates}) \
                     WHERE fighter_id = {id};\n"
                ));
            }
            script.push_str(FIGHT_RESULTS);
        }
    }

    sqlx::raw_sql(&script)
        .execute(&pool)
        .await
        .expect("seed fixture database");
    pool
}

pub async fn store(profile: SchemaProfile) -> Store {
    Store::from_pool(seeded_pool(profile).await)
        .await
        .expect("fixture store")
}
