use serde::{Deserialize, Serialize};

/// The evaluator's verdict for one submission. Immutable; attached to the
/// session's current question once received. `total_points` is the user's
/// new cumulative total and is authoritative.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
    pub points_earned: i64,
    pub total_points: i64,
}

/// Bearer credential returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_result_deserializes_from_wire_shape() {
        let json = r#"{
            "is_correct": true,
            "correct_answer": "Phishing",
            "explanation": "Phishing lures users into revealing credentials.",
            "points_earned": 10,
            "total_points": 150
        }"#;

        let result: AnswerResult = serde_json::from_str(json).unwrap();

        assert!(result.is_correct);
        assert_eq!(result.correct_answer, "Phishing");
        assert_eq!(result.points_earned, 10);
        assert_eq!(result.total_points, 150);
    }

    #[test]
    fn error_body_extracts_detail() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "Question not found"}"#).unwrap();
        assert_eq!(body.detail, "Question not found");
    }
}
