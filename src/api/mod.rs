pub mod auth;
pub mod client;
pub mod evaluator;
pub mod leaderboard;
pub mod question_bank;

pub use auth::{AccountApi, HttpAccountApi};
pub use client::ApiClient;
pub use evaluator::{AnswerEvaluator, HttpAnswerEvaluator};
pub use leaderboard::{HttpLeaderboardAggregator, LeaderboardAggregator};
pub use question_bank::{HttpQuestionBank, QuestionBank};
