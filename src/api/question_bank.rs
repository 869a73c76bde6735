use async_trait::async_trait;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::errors::QuizResult;
use crate::models::domain::{Question, UserStats};
use crate::models::dto::request::QuestionFilters;

const RANDOM_PATH: &str = "/api/questions/random";
const CATEGORIES_PATH: &str = "/api/questions/categories";
const STATS_PATH: &str = "/api/questions/stats";

/// Access to the question bank. The bank guarantees no duplicate question
/// ids within one returned set; it may return fewer questions than requested
/// when the filtered pool is small.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionBank: Send + Sync {
    async fn fetch_random(
        &self,
        count: u32,
        filters: QuestionFilters,
    ) -> QuizResult<Vec<Question>>;

    async fn categories(&self) -> QuizResult<Vec<String>>;

    async fn stats(&self) -> QuizResult<UserStats>;
}

pub struct HttpQuestionBank {
    client: Arc<ApiClient>,
}

impl HttpQuestionBank {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuestionBank for HttpQuestionBank {
    async fn fetch_random(
        &self,
        count: u32,
        filters: QuestionFilters,
    ) -> QuizResult<Vec<Question>> {
        let questions: Vec<Question> = self
            .client
            .get_json(RANDOM_PATH, &filters.query_pairs(count))
            .await?;
        log::debug!(
            "question bank returned {} of {} requested questions",
            questions.len(),
            count
        );
        Ok(questions)
    }

    async fn categories(&self) -> QuizResult<Vec<String>> {
        self.client.get_json(CATEGORIES_PATH, &[]).await
    }

    async fn stats(&self) -> QuizResult<UserStats> {
        self.client.get_json(STATS_PATH, &[]).await
    }
}
