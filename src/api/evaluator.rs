use async_trait::async_trait;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::errors::QuizResult;
use crate::models::dto::request::AnswerSubmission;
use crate::models::dto::response::AnswerResult;

const SUBMIT_PATH: &str = "/api/questions/submit";

/// The authoritative judge of correctness and points. The controller never
/// computes a score itself; it mirrors whatever this evaluator reports.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn submit_answer(&self, submission: AnswerSubmission) -> QuizResult<AnswerResult>;
}

pub struct HttpAnswerEvaluator {
    client: Arc<ApiClient>,
}

impl HttpAnswerEvaluator {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnswerEvaluator for HttpAnswerEvaluator {
    async fn submit_answer(&self, submission: AnswerSubmission) -> QuizResult<AnswerResult> {
        let result: AnswerResult = self.client.post_json(SUBMIT_PATH, &submission).await?;
        log::debug!(
            "evaluator judged question {}: correct={} points_earned={}",
            submission.question_id,
            result.is_correct,
            result.points_earned
        );
        Ok(result)
    }
}
