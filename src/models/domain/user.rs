use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered account as returned by the register endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub total_points: i64,
    pub created_at: NaiveDateTime,
}

/// The authenticated user's own profile with rank and accuracy rolled in.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub total_points: i64,
    pub created_at: NaiveDateTime,
    pub rank: Option<u32>,
    #[serde(default)]
    pub total_attempts: u32,
    #[serde(default)]
    pub correct_attempts: u32,
    #[serde(default)]
    pub accuracy: f64,
}

/// Detailed per-user answering statistics from the question service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserStats {
    pub total_points: i64,
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub accuracy: f64,
    pub rank: u32,
    pub questions_by_category: HashMap<String, CategoryBreakdown>,
    pub recent_activity: Vec<RecentAttempt>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CategoryBreakdown {
    pub attempts: u32,
    pub correct: u32,
    pub accuracy: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RecentAttempt {
    pub question_id: i64,
    pub is_correct: bool,
    pub points_earned: i64,
    pub created_at: NaiveDateTime,
}
