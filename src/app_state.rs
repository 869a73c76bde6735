use std::sync::Arc;

use crate::{
    api::{ApiClient, HttpAccountApi, HttpAnswerEvaluator, HttpLeaderboardAggregator, HttpQuestionBank},
    config::Config,
    errors::QuizResult,
    services::{AccountService, LeaderboardService, QuizSessionController},
};

/// Wires the HTTP collaborators behind their traits into the services.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub session_controller: Arc<QuizSessionController>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub client: Arc<ApiClient>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> QuizResult<Self> {
        let client = Arc::new(ApiClient::new(&config)?);

        let account_api = Arc::new(HttpAccountApi::new(client.clone()));
        let account_service = Arc::new(AccountService::new(account_api));

        let question_bank = Arc::new(HttpQuestionBank::new(client.clone()));
        let evaluator = Arc::new(HttpAnswerEvaluator::new(client.clone()));
        let session_controller = Arc::new(QuizSessionController::new(question_bank, evaluator));

        let aggregator = Arc::new(HttpLeaderboardAggregator::new(client.clone()));
        let leaderboard_service = Arc::new(LeaderboardService::new(aggregator));

        Ok(Self {
            account_service,
            session_controller,
            leaderboard_service,
            client,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_wires_from_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert!(state.client.has_token().await);
        assert_eq!(state.config.question_count, 5);
    }
}
