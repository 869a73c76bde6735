use crate::models::domain::{Difficulty, LeaderboardEntry, Question};
use crate::models::dto::response::AnswerResult;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A multiple-choice question whose first option ("Phishing") is the
    /// canonical correct answer.
    pub fn sample_question(id: i64) -> Question {
        Question {
            id,
            question_text: format!("Sample cybersecurity question {}", id),
            options: vec![
                "Phishing".to_string(),
                "SQL Injection".to_string(),
                "DDoS".to_string(),
                "Brute Force".to_string(),
            ],
            category: "phishing".to_string(),
            difficulty: Difficulty::Easy,
            points_value: 10,
        }
    }

    /// Questions with ids 1..=n, in fetch order.
    pub fn sample_questions(n: usize) -> Vec<Question> {
        (1..=n as i64).map(sample_question).collect()
    }

    pub fn correct_result(points_earned: i64, total_points: i64) -> AnswerResult {
        AnswerResult {
            is_correct: true,
            correct_answer: "Phishing".to_string(),
            explanation: "Phishing lures users into revealing credentials.".to_string(),
            points_earned,
            total_points,
        }
    }

    pub fn incorrect_result(total_points: i64) -> AnswerResult {
        AnswerResult {
            is_correct: false,
            correct_answer: "Phishing".to_string(),
            explanation: "Phishing lures users into revealing credentials.".to_string(),
            points_earned: 0,
            total_points,
        }
    }

    pub fn leaderboard_entry(rank: u32, username: &str, total_points: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            username: username.to_string(),
            total_points,
            correct_attempts: 10,
            total_attempts: 12,
            accuracy: 83.33,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_questions() {
        let questions = sample_questions(3);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[2].id, 3);
        assert!(questions.iter().all(|q| q.has_option("Phishing")));
    }

    #[test]
    fn test_fixtures_results_agree_on_canonical_answer() {
        let correct = correct_result(10, 10);
        let incorrect = incorrect_result(10);
        assert!(correct.is_correct);
        assert!(!incorrect.is_correct);
        assert_eq!(correct.correct_answer, incorrect.correct_answer);
        assert_eq!(incorrect.points_earned, 0);
    }
}
