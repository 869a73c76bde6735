use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{QuizError, QuizResult};
use crate::models::domain::Question;
use crate::models::dto::response::AnswerResult;

/// One bounded quiz run: a fixed, ordered set of questions fetched once at
/// start, walked front to back with a monotonic cursor.
///
/// The session is a plain value with no I/O of its own. It only enforces the
/// state machine; correctness and points always come from the evaluator and
/// are mirrored here verbatim, never computed locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: Uuid,
    questions: Vec<Question>,
    // results[i] doubles as the per-question answered flag
    results: Vec<Option<AnswerResult>>,
    cursor: usize,
    correct_count: u32,
    total_points: i64,
    finished: bool,
    // when the current question was first shown; telemetry only
    shown_at: Option<DateTime<Utc>>,
}

/// Where a session currently sits in its lifecycle. The cursor index is
/// carried so callers can render progress without extra accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingAnswer(usize),
    AwaitingAdvance(usize),
    Finished,
}

impl QuizSession {
    /// Builds a session over a non-empty question set. The question order is
    /// the fetch order and never changes afterwards.
    pub fn new(questions: Vec<Question>) -> QuizResult<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyResult(
                "question bank returned no questions".to_string(),
            ));
        }

        // The bank guarantees distinct ids within one returned set
        debug_assert!(
            {
                let mut ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "question bank returned duplicate question ids"
        );

        let results = vec![None; questions.len()];
        Ok(Self {
            id: Uuid::new_v4(),
            questions,
            results,
            cursor: 0,
            correct_count: 0,
            total_points: 0,
            finished: false,
            shown_at: None,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// The evaluator's last reported cumulative total, 0 before the first
    /// submission lands.
    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn phase(&self) -> SessionPhase {
        if self.finished {
            SessionPhase::Finished
        } else if self.results[self.cursor].is_some() {
            SessionPhase::AwaitingAdvance(self.cursor)
        } else {
            SessionPhase::AwaitingAnswer(self.cursor)
        }
    }

    /// The question at the cursor. Errors once the session is Finished.
    pub fn current_question(&self) -> QuizResult<&Question> {
        if self.finished {
            return Err(QuizError::InvalidState(
                "session is finished; no current question".to_string(),
            ));
        }
        Ok(&self.questions[self.cursor])
    }

    /// The result attached to the current question, if it was answered.
    pub fn current_result(&self) -> Option<&AnswerResult> {
        if self.finished {
            return None;
        }
        self.results[self.cursor].as_ref()
    }

    /// Records the first time the current question is displayed. Subsequent
    /// calls for the same question keep the original timestamp.
    pub fn mark_shown(&mut self, now: DateTime<Utc>) {
        if !self.finished && self.shown_at.is_none() {
            self.shown_at = Some(now);
        }
    }

    /// Whole seconds since the current question was first displayed.
    /// Telemetry only; a slow answer is never invalidated.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> Option<u32> {
        self.shown_at
            .map(|shown| (now - shown).num_seconds().max(0) as u32)
    }

    /// Attaches the evaluator's verdict to the current question, moving the
    /// session from AwaitingAnswer to AwaitingAdvance. Rejects a second
    /// submission for the same question and any submission after Finished.
    pub fn record_result(&mut self, result: AnswerResult) -> QuizResult<()> {
        if self.finished {
            return Err(QuizError::InvalidState(
                "session is finished; cannot record an answer".to_string(),
            ));
        }
        if self.results[self.cursor].is_some() {
            return Err(QuizError::InvalidState(format!(
                "question {} was already answered",
                self.questions[self.cursor].id
            )));
        }

        if result.is_correct {
            self.correct_count += 1;
        }
        // Mirror the server's authoritative cumulative total, never sum locally
        self.total_points = result.total_points;
        self.results[self.cursor] = Some(result);
        Ok(())
    }

    /// Moves past an answered question. Returns `true` while more questions
    /// remain; at the last index the session transitions to Finished and
    /// `false` is returned. Advancing an unanswered question is rejected.
    pub fn advance(&mut self) -> QuizResult<bool> {
        if self.finished {
            return Err(QuizError::InvalidState(
                "session is finished; cannot advance".to_string(),
            ));
        }
        if self.results[self.cursor].is_none() {
            return Err(QuizError::InvalidState(
                "current question has not been answered yet".to_string(),
            ));
        }

        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            self.shown_at = None;
            Ok(true)
        } else {
            self.finished = true;
            self.shown_at = None;
            Ok(false)
        }
    }
}
