use serde::{Deserialize, Serialize};

/// One row of the ranked standings. A snapshot owned by the aggregator; the
/// client consumes the returned order as authoritative and never re-sorts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32, // 1 = best
    pub username: String,
    pub total_points: i64,
    pub correct_attempts: u32,
    pub total_attempts: u32,
    pub accuracy: f64, // percentage, 0.0..=100.0
}
