use serde::{Deserialize, Serialize};
use validator::Validate;

/// Optional narrowing of the random-question fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionFilters {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl QuestionFilters {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            difficulty: None,
        }
    }

    /// Query-string pairs for the random-question endpoint.
    pub fn query_pairs(&self, count: u32) -> Vec<(String, String)> {
        let mut pairs = vec![("count".to_string(), count.to_string())];
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(difficulty) = &self.difficulty {
            pairs.push(("difficulty".to_string(), difficulty.clone()));
        }
        pairs
    }
}

/// Wire shape of one answer submission. `time_taken` is telemetry only and
/// omitted when the question was never marked as shown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct AnswerSubmission {
    pub question_id: i64,
    #[validate(length(min = 1, message = "an answer must be selected"))]
    pub selected_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<u32>, // seconds
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Login is form-encoded (OAuth2 password flow), not JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_build_query_pairs_in_order() {
        let filters = QuestionFilters {
            category: Some("phishing".to_string()),
            difficulty: Some("easy".to_string()),
        };

        let pairs = filters.query_pairs(5);

        assert_eq!(
            pairs,
            vec![
                ("count".to_string(), "5".to_string()),
                ("category".to_string(), "phishing".to_string()),
                ("difficulty".to_string(), "easy".to_string()),
            ]
        );
    }

    #[test]
    fn default_filters_only_carry_count() {
        let pairs = QuestionFilters::default().query_pairs(3);
        assert_eq!(pairs, vec![("count".to_string(), "3".to_string())]);
    }

    #[test]
    fn empty_selected_answer_fails_validation() {
        let submission = AnswerSubmission {
            question_id: 1,
            selected_answer: String::new(),
            time_taken: None,
        };

        assert!(submission.validate().is_err());
    }

    #[test]
    fn time_taken_is_omitted_when_absent() {
        let submission = AnswerSubmission {
            question_id: 7,
            selected_answer: "Phishing".to_string(),
            time_taken: None,
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("time_taken").is_none());
    }

    #[test]
    fn register_request_validates_email() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "correcthorse".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
