use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<SecretString>,
    pub api_username: Option<String>,
    pub api_password: Option<SecretString>,
    pub question_count: u32,
    pub leaderboard_limit: u32,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("QUIZ_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            api_token: env::var("QUIZ_API_TOKEN").ok().map(SecretString::from),
            api_username: env::var("QUIZ_API_USERNAME").ok(),
            api_password: env::var("QUIZ_API_PASSWORD").ok().map(SecretString::from),
            question_count: env::var("QUIZ_QUESTION_COUNT")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(5),
            leaderboard_limit: env::var("QUIZ_LEADERBOARD_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(10),
            request_timeout_secs: env::var("QUIZ_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            api_token: Some(SecretString::from("test_bearer_token".to_string())),
            api_username: None,
            api_password: None,
            question_count: 5,
            leaderboard_limit: 10,
            request_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.api_base_url.is_empty());
        assert!(config.question_count >= 1);
        assert!(config.leaderboard_limit >= 1);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.question_count, 5);
        assert_eq!(config.leaderboard_limit, 10);
        assert!(config.api_token.is_some());
    }
}
