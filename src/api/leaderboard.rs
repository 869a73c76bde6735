use async_trait::async_trait;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::errors::QuizResult;
use crate::models::domain::LeaderboardEntry;

const LEADERBOARD_PATH: &str = "/api/leaderboard";
const MY_RANK_PATH: &str = "/api/leaderboard/me";

/// Ranked standings across all users. The returned order is authoritative,
/// including whatever tie-break rule the aggregator applies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardAggregator: Send + Sync {
    /// Top scorers, ranks 1..=limit, points non-increasing with rank.
    async fn top(&self, limit: u32) -> QuizResult<Vec<LeaderboardEntry>>;

    /// The authenticated user's own entry.
    async fn my_rank(&self) -> QuizResult<LeaderboardEntry>;
}

pub struct HttpLeaderboardAggregator {
    client: Arc<ApiClient>,
}

impl HttpLeaderboardAggregator {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LeaderboardAggregator for HttpLeaderboardAggregator {
    async fn top(&self, limit: u32) -> QuizResult<Vec<LeaderboardEntry>> {
        let query = [("limit".to_string(), limit.to_string())];
        self.client.get_json(LEADERBOARD_PATH, &query).await
    }

    async fn my_rank(&self) -> QuizResult<LeaderboardEntry> {
        self.client.get_json(MY_RANK_PATH, &[]).await
    }
}
