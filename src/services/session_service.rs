use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::api::{AnswerEvaluator, QuestionBank};
use crate::errors::{QuizError, QuizResult};
use crate::models::domain::{Question, QuizSession, SessionPhase, UserStats};
use crate::models::dto::request::{AnswerSubmission, QuestionFilters};
use crate::models::dto::response::AnswerResult;

/// Orchestrates one finite quiz run: fetch questions once, walk them in
/// order, enforce single submission per question, and finish after the last
/// question. The controller owns no session; callers pass their
/// `QuizSession` value through each operation.
///
/// Collaborator failures are surfaced as-is and never retried here. A failed
/// submit leaves the session untouched, so the caller may retry the same
/// operation safely. Mutation happens only after a collaborator response
/// arrives, which also makes dropping an in-flight call harmless.
pub struct QuizSessionController {
    bank: Arc<dyn QuestionBank>,
    evaluator: Arc<dyn AnswerEvaluator>,
}

impl QuizSessionController {
    pub fn new(bank: Arc<dyn QuestionBank>, evaluator: Arc<dyn AnswerEvaluator>) -> Self {
        Self { bank, evaluator }
    }

    /// Starts a new run with up to `count` questions. An empty bank response
    /// is a "no content" condition, not a crash: `EmptyResult` is returned
    /// and no session exists.
    pub async fn start(&self, count: u32, filters: QuestionFilters) -> QuizResult<QuizSession> {
        if count == 0 {
            return Err(QuizError::InvalidInput(
                "a session needs at least one question".to_string(),
            ));
        }

        let questions = self.bank.fetch_random(count, filters).await?;
        let session = QuizSession::new(questions)?;
        log::info!(
            "started quiz session {} with {} questions",
            session.id,
            session.len()
        );
        Ok(session)
    }

    /// The question at the cursor. The first call per question stamps the
    /// shown-at time used for elapsed-time telemetry.
    pub fn current_question<'s>(&self, session: &'s mut QuizSession) -> QuizResult<&'s Question> {
        session.mark_shown(Utc::now());
        session.current_question()
    }

    /// Submits the selected answer for the current question.
    ///
    /// Local rejections (nothing reaches the evaluator, session unchanged):
    /// empty selection or a selection that is not one of the question's
    /// options (`InvalidInput`); an already-answered question or a finished
    /// session (`InvalidState`).
    pub async fn submit(
        &self,
        session: &mut QuizSession,
        selected_answer: &str,
    ) -> QuizResult<AnswerResult> {
        let cursor = match session.phase() {
            SessionPhase::AwaitingAnswer(cursor) => cursor,
            SessionPhase::AwaitingAdvance(_) => {
                return Err(QuizError::InvalidState(
                    "current question was already answered".to_string(),
                ))
            }
            SessionPhase::Finished => {
                return Err(QuizError::InvalidState(
                    "session is finished; nothing left to submit".to_string(),
                ))
            }
        };

        let question = session.current_question()?;
        let submission = AnswerSubmission {
            question_id: question.id,
            selected_answer: selected_answer.to_string(),
            time_taken: session.elapsed_secs(Utc::now()),
        };
        submission.validate()?;
        if !question.has_option(selected_answer) {
            return Err(QuizError::InvalidInput(format!(
                "'{}' is not an option of question {}",
                selected_answer, question.id
            )));
        }

        let result = self.evaluator.submit_answer(submission).await?;
        session.record_result(result.clone())?;
        log::debug!(
            "session {} question {} answered: correct={} total_points={}",
            session.id,
            cursor,
            result.is_correct,
            result.total_points
        );
        Ok(result)
    }

    /// Moves to the next question once the current one is answered. Returns
    /// `false` when the run just finished; the session is then terminal.
    pub fn advance(&self, session: &mut QuizSession) -> QuizResult<bool> {
        let has_next = session.advance()?;
        if !has_next {
            log::info!(
                "quiz session {} finished: {}/{} correct, {} total points",
                session.id,
                session.correct_count(),
                session.len(),
                session.total_points()
            );
        }
        Ok(has_next)
    }

    /// Distinct categories currently present in the question bank.
    pub async fn categories(&self) -> QuizResult<Vec<String>> {
        self.bank.categories().await
    }

    /// The authenticated user's answering statistics.
    pub async fn stats(&self) -> QuizResult<UserStats> {
        self.bank.stats().await
    }
}
