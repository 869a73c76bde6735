use std::sync::Arc;

use crate::api::LeaderboardAggregator;
use crate::errors::{QuizError, QuizResult};
use crate::models::domain::LeaderboardEntry;

/// Pull-based standings queries, independent of any quiz session. The
/// aggregator's ordering (including tie-breaks) is consumed as-is.
pub struct LeaderboardService {
    aggregator: Arc<dyn LeaderboardAggregator>,
}

impl LeaderboardService {
    pub fn new(aggregator: Arc<dyn LeaderboardAggregator>) -> Self {
        Self { aggregator }
    }

    pub async fn top(&self, limit: u32) -> QuizResult<Vec<LeaderboardEntry>> {
        if limit == 0 {
            return Err(QuizError::InvalidInput(
                "leaderboard limit must be at least 1".to_string(),
            ));
        }
        let entries = self.aggregator.top(limit).await?;
        log::debug!("leaderboard returned {} of {} entries", entries.len(), limit);
        Ok(entries)
    }

    pub async fn my_rank(&self) -> QuizResult<LeaderboardEntry> {
        self.aggregator.my_rank().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::leaderboard::MockLeaderboardAggregator;
    use crate::test_utils::fixtures::leaderboard_entry;

    #[tokio::test]
    async fn top_three_is_ranked_with_non_increasing_points() {
        let mut aggregator = MockLeaderboardAggregator::new();
        aggregator.expect_top().times(1).returning(|limit| {
            assert_eq!(limit, 3);
            Ok(vec![
                leaderboard_entry(1, "alice", 300),
                leaderboard_entry(2, "bob", 250),
                leaderboard_entry(3, "carol", 250),
            ])
        });
        let service = LeaderboardService::new(Arc::new(aggregator));

        let entries = service.top(3).await.unwrap();

        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(entries.windows(2).all(|w| w[0].total_points >= w[1].total_points));
    }

    #[tokio::test]
    async fn zero_limit_is_rejected_without_calling_the_aggregator() {
        let service = LeaderboardService::new(Arc::new(MockLeaderboardAggregator::new()));

        let err = service.top(0).await.unwrap_err();

        assert!(matches!(err, QuizError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn my_rank_passes_through() {
        let mut aggregator = MockLeaderboardAggregator::new();
        aggregator
            .expect_my_rank()
            .times(1)
            .returning(|| Ok(leaderboard_entry(7, "dave", 90)));
        let service = LeaderboardService::new(Arc::new(aggregator));

        let entry = service.my_rank().await.unwrap();

        assert_eq!(entry.rank, 7);
        assert_eq!(entry.username, "dave");
    }

    #[tokio::test]
    async fn aggregator_failure_surfaces_as_transient() {
        let mut aggregator = MockLeaderboardAggregator::new();
        aggregator
            .expect_top()
            .returning(|_| Err(QuizError::Transient("service unavailable".to_string())));
        let service = LeaderboardService::new(Arc::new(aggregator));

        let err = service.top(10).await.unwrap_err();

        assert!(err.is_retryable());
    }
}
