use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub options: Vec<String>, // ordered, no duplicates within a question
    pub category: String,
    pub difficulty: Difficulty,
    pub points_value: i64,
}

impl Question {
    /// Whether the given answer is one of this question's options.
    /// Comparison is exact: options are presented verbatim from the bank.
    pub fn has_option(&self, answer: &str) -> bool {
        self.options.iter().any(|opt| opt == answer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}
